#![forbid(unsafe_code)]
#![deny(unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Transport-aware TypeScript request-function emitter for OpenAPI-style
//! operations.
//!
//! Given a resolved [`operation::OperationDescriptor`], an
//! [`config::OverrideConfig`], and a [`config::GenerationContext`], this
//! crate emits one ready-to-compile request function per operation for one
//! of three transports (built-in axios or fetch client, user-supplied
//! "mutator" transport, or Angular's injected `HttpClient`), plus the
//! auxiliary fragments a downstream hook assembler composes into
//! reactive-caching hooks.
//!
//! The crate is a pure, synchronous text-generation pass: descriptors and
//! context are read-only inputs, every emitter is total over well-formed
//! inputs, and no I/O happens here. Parsing input schemas, laying out
//! generated files on disk, and executing requests are concerns of the
//! surrounding pipeline.

pub mod codegen;
pub mod config;
pub mod error;
pub mod operation;

mod ts;

pub use error::Error;
