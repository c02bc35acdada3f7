//! Generation context, override configuration, and transport selection.
//!
//! Both [`GenerationContext`] and [`OverrideConfig`] deserialize from the
//! camelCase JSON vocabulary of the configuration files, with every field
//! defaulted so an empty object is a valid configuration.

use serde::Deserialize;

use crate::error::Error;
use crate::operation::OperationDescriptor;

/// Built-in HTTP client of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpClient {
    Axios,
    Fetch,
}

/// Front-end framework the generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    React,
    Vue,
    Svelte,
    Solid,
    Angular,
}

impl OutputTarget {
    /// Targets whose hook layer memoizes with `useCallback`.
    pub fn uses_callback_memoization(self) -> bool {
        matches!(self, OutputTarget::React | OutputTarget::Svelte | OutputTarget::Solid)
    }
}

/// Process-wide read-only generation settings, threaded explicitly into
/// every emission call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationContext {
    pub http_client: HttpClient,
    pub target: OutputTarget,
    /// Route path parameters are wrapped in `encodeURIComponent` when set.
    pub url_encode_parameters: bool,
    /// Mirrors the target tsconfig's `exactOptionalPropertyTypes`: an
    /// explicit `signal: undefined` must never be emitted when set.
    pub exact_optional_property_types: bool,
    /// Mirrors `allowSyntheticDefaultImports`; when unset the axios call
    /// goes through `axios.default`.
    pub allow_synthetic_default_imports: bool,
    /// Makes the custom-transport options parameter non-optional.
    pub options_param_required: bool,
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self {
            http_client: HttpClient::Axios,
            target: OutputTarget::React,
            url_encode_parameters: false,
            exact_optional_property_types: false,
            allow_synthetic_default_imports: true,
            options_param_required: false,
        }
    }
}

/// Toggles for the multipart form-data encoding path.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDataOverride {
    pub disabled: bool,
}

/// Overrides consumed by the caching/query layer. `use_prefetch` and
/// `use_invalidate` are recognized here and carried for the downstream hook
/// assembler.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOverrides {
    pub signal: bool,
    pub should_export_http_client: bool,
    pub should_export_mutator_hooks: bool,
    pub use_prefetch: bool,
    pub use_invalidate: bool,
}

impl Default for QueryOverrides {
    fn default() -> Self {
        Self {
            signal: true,
            should_export_http_client: true,
            should_export_mutator_hooks: true,
            use_prefetch: false,
            use_invalidate: false,
        }
    }
}

/// Options forwarded to an inline `qs.stringify` params serializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamsSerializerOptions {
    /// Raw `qs` option object, forwarded verbatim into the generated arrow.
    pub qs: Option<serde_json::Value>,
}

/// User-registered custom transport ("mutator") replacing the default
/// transport for an operation. The flag set is resolved upstream from the
/// referenced module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mutator {
    /// Display name of the transport function.
    pub name: String,
    /// Module path of the transport function, as written in configuration.
    pub path: String,
    /// Whether the transport accepts a second request-options argument.
    #[serde(default)]
    pub has_second_arg: bool,
    /// Whether the transport is a hook factory that must be invoked once to
    /// obtain the real caller.
    #[serde(default)]
    pub is_hook: bool,
    /// Declared body-wrapper type name; rewrites the body prop's type to
    /// `wrapper<bodyType>` when present.
    #[serde(default)]
    pub body_type_name: Option<String>,
    /// Whether the transport supplies its own error type.
    #[serde(default)]
    pub has_error_type: bool,
    /// Whether this is the shared default mutator; its error wrapper is
    /// prefixed per operation to keep generated names unique.
    #[serde(default)]
    pub default: bool,
}

/// Per-operation override configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverrideConfig {
    pub request_options: bool,
    pub form_data: FormDataOverride,
    pub form_url_encoded: bool,
    pub query: QueryOverrides,
    pub params_serializer_options: Option<ParamsSerializerOptions>,
    pub mutator: Option<Mutator>,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            request_options: true,
            form_data: FormDataOverride::default(),
            form_url_encoded: true,
            query: QueryOverrides::default(),
            params_serializer_options: None,
            mutator: None,
        }
    }
}

impl OverrideConfig {
    /// Deserialize from a JSON value produced by the configuration loader.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Transport that actually issues the HTTP request, selected by fixed
/// precedence: Angular target > configured mutator > built-in client.
/// Exactly one transport-specific emitter runs per operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transport<'a> {
    Angular,
    Custom(&'a Mutator),
    Builtin(HttpClient),
}

impl<'a> Transport<'a> {
    /// Select the transport for one operation.
    pub fn select(ctx: &GenerationContext, cfg: &'a OverrideConfig) -> Transport<'a> {
        if ctx.target == OutputTarget::Angular {
            Transport::Angular
        } else if let Some(mutator) = &cfg.mutator {
            Transport::Custom(mutator)
        } else {
            Transport::Builtin(ctx.http_client)
        }
    }

    /// Short label used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Transport::Angular => "angular",
            Transport::Custom(_) => "mutator",
            Transport::Builtin(HttpClient::Axios) => "axios",
            Transport::Builtin(HttpClient::Fetch) => "fetch",
        }
    }
}

/// Validate every descriptor before emission starts.
pub(crate) fn validate_operations(ops: &[OperationDescriptor]) -> Result<(), Error> {
    for op in ops {
        op.validate()?;
    }
    Ok(())
}
