//! Host-framework (Angular `HttpClient`) function emitter.
//!
//! The injected client is an explicit first parameter rather than an ambient
//! global, and props are never ref-wrapped: the outer injection layer
//! unwraps Angular signals before calling this function.

use crate::config::{GenerationContext, OverrideConfig, Transport};
use crate::operation::OperationDescriptor;
use crate::ts::{Emit, FunctionDef, TsParam};

use super::http::{config_argument, request_config, BodyEncoding, EmitterFlags};
use super::options::trailing_parameters;
use super::utils::props_to_ts_params;

/// Emit the request function for the Angular `HttpClient` transport.
pub fn generate_angular_request_function(
    op: &OperationDescriptor,
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
) -> String {
    let flags = EmitterFlags::resolve(op, cfg, ctx);
    let encoding = BodyEncoding::resolve(op.body.as_ref(), flags);

    let mut params = vec![TsParam::new("http", "HttpClient")];
    params.extend(props_to_ts_params(&op.params));
    params.extend(trailing_parameters(
        Transport::Angular,
        flags.is_request_options,
        flags.signal,
        ctx.options_param_required,
    ));

    let mut body = Vec::new();
    if let Some(statement) = &encoding.statement {
        body.push(statement.clone());
    }

    let route = op.route_template(ctx.url_encode_parameters);
    let mut args = vec![format!("`{route}`")];
    if op.verb.has_body() {
        args.push(encoding.data_ref.clone().unwrap_or_else(|| "undefined".into()));
    }
    if let Some(config) = config_argument(request_config(op, cfg, flags, &encoding, false)) {
        args.push(config);
    }

    let success = op.response.success.as_deref().unwrap_or("unknown");

    // Angular's overloads special-case text and blob responses; an explicit
    // generic argument would conflict with them.
    let omit_generic =
        op.response.is_blob || op.response.content_types.first().is_some_and(|ct| ct == "text/plain");
    let generic = if omit_generic { String::new() } else { format!("<{success}>") };

    body.push(format!(
        "return lastValueFrom(http.{method}{generic}({args}));",
        method = op.verb.method_name(),
        args = args.join(", ")
    ));

    FunctionDef {
        export: cfg.query.should_export_http_client,
        name: op.name.clone(),
        params,
        return_type: Some(format!("Promise<{success}>")),
        body,
        is_async: false,
    }
    .emit()
}
