//! Custom-transport ("mutator") function emitter.
//!
//! A configured mutator fully replaces the default transport for the
//! operation. The direct variant calls the user function with a constructed
//! request config; the hook-factory variant wraps the body in a memoized
//! closure so the factory is invoked exactly once per component instance.

use tracing::warn;

use crate::config::{GenerationContext, Mutator, OutputTarget, OverrideConfig, Transport};
use crate::operation::{Body, OperationDescriptor, Param, ParamKind, Verb};
use crate::ts::{arrow, object, Emit, Field, FunctionDef, TsParam};

use super::http::{BodyEncoding, EmitterFlags};
use super::options::trailing_parameters;
use super::utils::{pascal, props_to_ts_params, unref_statements, wrap_props_maybe_ref};

/// Emit the request function delegating to a user-supplied transport.
pub fn generate_mutator_request_function(
    op: &OperationDescriptor,
    mutator: &Mutator,
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
) -> String {
    let flags = EmitterFlags::resolve(op, cfg, ctx);
    let encoding = BodyEncoding::resolve(op.body.as_ref(), flags);
    let is_vue = ctx.target == OutputTarget::Vue;

    let mut props = if is_vue { wrap_props_maybe_ref(&op.params) } else { op.params.clone() };
    if let (Some(wrapper), Some(body)) = (&mutator.body_type_name, &op.body) {
        props = wrap_body_type(&props, body, wrapper, &op.name);
    }

    let mut params = props_to_ts_params(&props);
    params.extend(trailing_parameters(
        Transport::Custom(mutator),
        flags.is_request_options,
        flags.signal,
        ctx.options_param_required,
    ));

    let success = op.response.success.as_deref().unwrap_or("unknown").to_string();
    let config = mutator_config(op, ctx, flags, &encoding, mutator.is_hook && is_vue);
    let request_options = flags.is_request_options && mutator.has_second_arg;

    if mutator.is_hook {
        generate_hook_variant(op, mutator, cfg, ctx, &encoding, params, &success, &config, request_options)
    } else {
        let mut body = Vec::new();
        if is_vue {
            body.extend(unref_statements(&op.params));
        }
        if let Some(statement) = &encoding.statement {
            body.push(statement.clone());
        }
        let call_args = call_arguments(&config, request_options);
        body.push(format!("return {}<{success}>({call_args});", mutator.name));

        FunctionDef {
            export: cfg.query.should_export_http_client,
            name: op.name.clone(),
            params,
            return_type: None,
            body,
            is_async: false,
        }
        .emit()
    }
}

#[allow(clippy::too_many_arguments)]
fn generate_hook_variant(
    op: &OperationDescriptor,
    mutator: &Mutator,
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
    encoding: &BodyEncoding,
    params: Vec<TsParam>,
    success: &str,
    config: &str,
    request_options: bool,
) -> String {
    let caller = &op.name;

    let mut inner_body = Vec::new();
    if let Some(statement) = &encoding.statement {
        inner_body.push(statement.clone());
    }
    let call_args = call_arguments(config, request_options);
    inner_body.push(format!("return {caller}({call_args});"));

    let closure = arrow(&params, &inner_body);
    let return_stmt = if ctx.target.uses_callback_memoization() {
        // The factory result is the only dependency, so the closure identity
        // is stable across re-renders.
        format!("return useCallback({closure}, [{caller}]);")
    } else {
        format!("return {closure};")
    };

    FunctionDef {
        export: cfg.query.should_export_mutator_hooks,
        name: format!("use{}Hook", pascal(&op.name)),
        params: vec![],
        return_type: None,
        body: vec![
            format!("const {caller} = {}<{success}>();", mutator.name),
            String::new(),
            return_stmt,
        ],
        is_async: false,
    }
    .emit()
}

fn call_arguments(config: &str, request_options: bool) -> String {
    if request_options {
        format!("{config}, options")
    } else {
        config.to_string()
    }
}

/// Request-config object literal passed to the mutator.
fn mutator_config(
    op: &OperationDescriptor,
    ctx: &GenerationContext,
    flags: EmitterFlags,
    encoding: &BodyEncoding,
    unref_params_inline: bool,
) -> String {
    let mut fields = vec![
        Field::Entry("url".into(), format!("`{}`", op.route_template(ctx.url_encode_parameters))),
        Field::Entry("method".into(), format!("'{}'", op.verb.as_str())),
    ];

    if op.param_of_kind(ParamKind::Header).is_some() {
        fields.push(Field::Shorthand("headers".into()));
    }
    if op.param_of_kind(ParamKind::Query).is_some() {
        if unref_params_inline {
            // Vue hook closures cannot rebind props, so the bag is unwrapped
            // at the use site instead.
            fields.push(Field::Entry("params".into(), "unref(params)".into()));
        } else {
            fields.push(Field::Shorthand("params".into()));
        }
    }
    if let Some(data_ref) = &encoding.data_ref {
        if op.verb.has_body() || op.verb == Verb::Delete {
            fields.push(Field::Entry("data".into(), data_ref.clone()));
        }
    }
    if flags.signal {
        if flags.exact_optional {
            fields.push(Field::Spread("(signal ? { signal } : {})".into()));
        } else {
            fields.push(Field::Shorthand("signal".into()));
        }
    }

    object(&fields)
}

/// Rewrite the body prop's declared type to `wrapper<bodyType>`.
///
/// The match is exact type equality on the `Body`-kind prop, so other props
/// whose type text merely contains the body type are never touched.
fn wrap_body_type(props: &[Param], body: &Body, wrapper: &str, operation: &str) -> Vec<Param> {
    let mut matched = false;
    let rewritten: Vec<Param> = props
        .iter()
        .cloned()
        .map(|mut p| {
            if p.kind == ParamKind::Body && p.ty == body.definition {
                p.ty = format!("{wrapper}<{}>", body.definition);
                matched = true;
            }
            p
        })
        .collect();

    if !matched {
        warn!(
            operation,
            wrapper, "Body wrapper type matched no body prop; props left unchanged."
        );
        return props.to_vec();
    }

    rewritten
}
