//! Per-operation code emission.
//!
//! [`generate_request_function`] selects exactly one transport-specific
//! emitter by fixed precedence (Angular target > configured mutator >
//! built-in client) and returns the function definition as source text.
//! [`generate_client`] is the multi-operation convenience entry, adding
//! descriptor validation and the per-file header contribution.

mod angular;
mod hooks;
mod http;
mod mutator;
mod options;
mod response;
mod utils;

use tracing::debug;

use crate::config::{GenerationContext, HttpClient, OverrideConfig, Transport};
use crate::error::Error;
use crate::operation::OperationDescriptor;

pub use angular::generate_angular_request_function;
pub use hooks::{
    arguments_request_type, hook_call_properties, hook_options_destructure,
    mutation_options_implementation, mutation_request_args, DependencyExport, GeneratorDependency,
    AXIOS_DEPENDENCIES, SECOND_PARAMETER,
};
pub use http::{generate_axios_request_function, generate_fetch_request_function};
pub use mutator::generate_mutator_request_function;
pub use options::{has_signal, query_call_options, second_parameter_type, trailing_parameters};
pub use response::{dedupe_union, error_type};
pub use utils::pascal;

/// Emit the request function for one operation, dispatching on the selected
/// transport.
pub fn generate_request_function(
    op: &OperationDescriptor,
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
) -> String {
    let transport = Transport::select(ctx, cfg);
    debug!(
        operation = %op.name,
        transport = transport.label(),
        "Generating request function."
    );

    match transport {
        Transport::Angular => generate_angular_request_function(op, cfg, ctx),
        Transport::Custom(mutator) => generate_mutator_request_function(op, mutator, cfg, ctx),
        Transport::Builtin(HttpClient::Axios) => generate_axios_request_function(op, cfg, ctx),
        Transport::Builtin(HttpClient::Fetch) => generate_fetch_request_function(op, cfg, ctx),
    }
}

/// Transport-specific per-file header contribution.
///
/// Implementations render any snippet the generated functions of that
/// transport rely on; absence of a capability is legal and contributes
/// nothing.
pub trait HeaderEmitter {
    fn client_header(&self, ctx: &GenerationContext) -> String;
}

/// Header contribution for the built-in fetch client: the `ApiError` class
/// thrown on non-OK responses. Axios and Angular contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHeader;

impl HeaderEmitter for FetchHeader {
    fn client_header(&self, ctx: &GenerationContext) -> String {
        if ctx.http_client != HttpClient::Fetch {
            return String::new();
        }

        r#"export class ApiError extends Error {
  status: number;
  statusText: string;
  body: unknown;

  constructor(status: number, statusText: string, body: unknown) {
    super(`HTTP ${status}: ${statusText}`);
    this.name = "ApiError";
    this.status = status;
    this.statusText = statusText;
    this.body = body;
  }
}
"#
        .to_string()
    }
}

/// Render the header contribution for one generated file.
pub fn client_header(ctx: &GenerationContext, emitter: Option<&dyn HeaderEmitter>) -> String {
    emitter.map(|e| e.client_header(ctx)).unwrap_or_default()
}

/// Validate every descriptor, then render the header contribution plus one
/// request function per operation, joined with blank lines.
pub fn generate_client(
    ops: &[OperationDescriptor],
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
    header: Option<&dyn HeaderEmitter>,
) -> Result<String, Error> {
    crate::config::validate_operations(ops)?;

    let mut blocks = Vec::new();

    let header_contribution = client_header(ctx, header);
    if !header_contribution.is_empty() {
        blocks.push(header_contribution);
    }

    if cfg.mutator.as_ref().is_some_and(|m| m.has_second_arg) {
        blocks.push(format!("{SECOND_PARAMETER}\n"));
    }

    for op in ops {
        blocks.push(generate_request_function(op, cfg, ctx));
    }

    Ok(blocks.join("\n"))
}
