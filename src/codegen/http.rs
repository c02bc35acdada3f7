//! Default-transport function emitters: the built-in axios client and its
//! sibling fetch flavor.

use crate::config::{GenerationContext, HttpClient, OutputTarget, OverrideConfig, Transport};
use crate::operation::{Body, OperationDescriptor, ParamKind, Verb};
use crate::ts::{object, Emit, Field, FunctionDef};

use super::options::{has_signal, trailing_parameters};
use super::utils::{props_to_ts_params, unref_statements, wrap_props_maybe_ref};

/// Resolved per-operation emission flags, shared by all emitters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmitterFlags {
    pub is_request_options: bool,
    pub is_form_data: bool,
    pub is_form_url_encoded: bool,
    pub signal: bool,
    pub exact_optional: bool,
}

impl EmitterFlags {
    pub fn resolve(op: &OperationDescriptor, cfg: &OverrideConfig, ctx: &GenerationContext) -> Self {
        Self {
            is_request_options: cfg.request_options,
            is_form_data: !cfg.form_data.disabled,
            is_form_url_encoded: cfg.form_url_encoded,
            signal: has_signal(cfg.query.signal, op.verb),
            exact_optional: ctx.exact_optional_property_types,
        }
    }
}

/// Body-encoding fragment: a statement injected before the request call plus
/// the runtime reference the call passes as data.
#[derive(Debug, Clone, Default)]
pub(crate) struct BodyEncoding {
    pub statement: Option<String>,
    pub data_ref: Option<String>,
}

impl BodyEncoding {
    pub fn resolve(body: Option<&Body>, flags: EmitterFlags) -> Self {
        let Some(body) = body else {
            return Self::default();
        };

        if flags.is_form_data {
            if let Some(statement) = &body.form_data {
                return Self {
                    statement: Some(statement.clone()),
                    data_ref: Some("formData".into()),
                };
            }
        }
        if flags.is_form_url_encoded {
            if let Some(statement) = &body.form_url_encoded {
                return Self {
                    statement: Some(statement.clone()),
                    data_ref: Some("formUrlEncoded".into()),
                };
            }
        }

        Self {
            statement: None,
            data_ref: Some(body.implementation.clone()),
        }
    }

    /// JSON bodies pass through untouched; form bodies were rebound to the
    /// encoding variable by the injected statement.
    pub fn is_json(&self) -> bool {
        self.statement.is_none() && self.data_ref.is_some()
    }
}

/// Request-config object shared by the axios and Angular emitters.
pub(crate) fn request_config(
    op: &OperationDescriptor,
    cfg: &OverrideConfig,
    flags: EmitterFlags,
    encoding: &BodyEncoding,
    with_params_serializer: bool,
) -> Vec<Field> {
    let mut fields = Vec::new();

    if flags.is_request_options {
        fields.push(Field::Spread("options".into()));
    }

    if op.param_of_kind(ParamKind::Query).is_some() {
        if flags.is_request_options {
            fields.push(Field::Entry("params".into(), "{ ...params, ...options?.params }".into()));
        } else {
            fields.push(Field::Shorthand("params".into()));
        }

        if with_params_serializer {
            if let Some(serializer) = &op.params_serializer {
                fields.push(Field::Entry("paramsSerializer".into(), serializer.clone()));
            } else if let Some(options) = &cfg.params_serializer_options {
                if let Some(qs) = &options.qs {
                    fields.push(Field::Entry(
                        "paramsSerializer".into(),
                        format!("(params) => qs.stringify(params, {qs})"),
                    ));
                }
            }
        }
    }

    if op.param_of_kind(ParamKind::Header).is_some() {
        if flags.is_request_options {
            fields.push(Field::Entry("headers".into(), "{ ...headers, ...options?.headers }".into()));
        } else {
            fields.push(Field::Shorthand("headers".into()));
        }
    }

    // A DELETE body rides inside the config instead of a positional argument.
    if op.verb == Verb::Delete {
        if let Some(data_ref) = &encoding.data_ref {
            fields.push(Field::Entry("data".into(), data_ref.clone()));
        }
    }

    if flags.signal && !flags.is_request_options {
        fields.push(signal_config_field(flags.exact_optional));
    }

    fields
}

fn signal_config_field(exact_optional: bool) -> Field {
    if exact_optional {
        Field::Spread("(signal ? { signal } : {})".into())
    } else {
        Field::Shorthand("signal".into())
    }
}

/// Render the config object as a call argument. A config holding nothing but
/// the options spread collapses to `options` itself; an empty config yields
/// no argument.
pub(crate) fn config_argument(fields: Vec<Field>) -> Option<String> {
    match fields.as_slice() {
        [] => None,
        [Field::Spread(expr)] if expr == "options" => Some("options".to_string()),
        _ => Some(object(&fields)),
    }
}

/// Emit the request function for the built-in axios client.
pub fn generate_axios_request_function(
    op: &OperationDescriptor,
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
) -> String {
    let flags = EmitterFlags::resolve(op, cfg, ctx);
    let encoding = BodyEncoding::resolve(op.body.as_ref(), flags);
    let is_vue = ctx.target == OutputTarget::Vue;

    let props = if is_vue { wrap_props_maybe_ref(&op.params) } else { op.params.clone() };
    let mut params = props_to_ts_params(&props);
    params.extend(trailing_parameters(
        Transport::Builtin(HttpClient::Axios),
        flags.is_request_options,
        flags.signal,
        ctx.options_param_required,
    ));

    let mut body = Vec::new();
    if is_vue {
        body.extend(unref_statements(&op.params));
    }
    if let Some(statement) = &encoding.statement {
        body.push(statement.clone());
    }

    let route = op.route_template(ctx.url_encode_parameters);
    let mut args = vec![format!("`{route}`")];
    if op.verb.has_body() {
        args.push(encoding.data_ref.clone().unwrap_or_else(|| "undefined".into()));
    }
    if let Some(config) = config_argument(request_config(op, cfg, flags, &encoding, true)) {
        args.push(config);
    }

    let accessor = if ctx.allow_synthetic_default_imports { "axios" } else { "axios.default" };
    body.push(format!(
        "return {accessor}.{method}({args});",
        method = op.verb.method_name(),
        args = args.join(", ")
    ));

    let success = op.response.success.as_deref().unwrap_or("unknown");
    FunctionDef {
        export: cfg.query.should_export_http_client,
        name: op.name.clone(),
        params,
        return_type: Some(format!("Promise<AxiosResponse<{success}>>")),
        body,
        is_async: false,
    }
    .emit()
}

/// How the fetch flavor parses the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseMode {
    Json,
    Text,
    Blob,
}

fn parse_mode(op: &OperationDescriptor) -> ParseMode {
    if op.response.is_blob {
        ParseMode::Blob
    } else if op.response.content_types.first().is_some_and(|ct| ct == "text/plain") {
        ParseMode::Text
    } else {
        ParseMode::Json
    }
}

/// Emit the request function for the built-in fetch client.
pub fn generate_fetch_request_function(
    op: &OperationDescriptor,
    cfg: &OverrideConfig,
    ctx: &GenerationContext,
) -> String {
    let flags = EmitterFlags::resolve(op, cfg, ctx);
    let encoding = BodyEncoding::resolve(op.body.as_ref(), flags);
    let is_vue = ctx.target == OutputTarget::Vue;

    let props = if is_vue { wrap_props_maybe_ref(&op.params) } else { op.params.clone() };
    let mut params = props_to_ts_params(&props);
    params.extend(trailing_parameters(
        Transport::Builtin(HttpClient::Fetch),
        flags.is_request_options,
        flags.signal,
        ctx.options_param_required,
    ));

    let mut body = Vec::new();
    if is_vue {
        body.extend(unref_statements(&op.params));
    }
    if let Some(statement) = &encoding.statement {
        body.push(statement.clone());
    }

    let route = op.route_template(ctx.url_encode_parameters);
    let has_query_bag = op.param_of_kind(ParamKind::Query).is_some();
    let url_expr = if has_query_bag {
        body.push("const searchParams = new URLSearchParams(params as Record<string, string>);".into());
        body.push("const queryString = searchParams.toString();".into());
        body.push(format!(
            "const url = queryString ? `{route}?${{queryString}}` : `{route}`;"
        ));
        "url".to_string()
    } else {
        format!("`{route}`")
    };

    let init = fetch_init(op, flags, &encoding);
    body.push(format!("const res = await fetch({url_expr}, {init});"));

    body.push(
        "if (!res.ok) {\n  const body = await res.text();\n  let parsed: unknown;\n  try { parsed = JSON.parse(body); } catch { parsed = body; }\n  throw new ApiError(res.status, res.statusText, parsed);\n}"
            .to_string(),
    );

    let mode = parse_mode(op);
    let (data_type, method) = match mode {
        ParseMode::Json => (op.response.success.as_deref().unwrap_or("unknown").to_string(), "json"),
        ParseMode::Text => ("string".to_string(), "text"),
        ParseMode::Blob => ("Blob".to_string(), "blob"),
    };
    body.push(format!("return {{ data: await res.{method}() }};"));

    FunctionDef {
        export: cfg.query.should_export_http_client,
        name: op.name.clone(),
        params,
        return_type: Some(format!("Promise<{{ data: {data_type} }}>")),
        body,
        is_async: true,
    }
    .emit()
}

fn fetch_init(op: &OperationDescriptor, flags: EmitterFlags, encoding: &BodyEncoding) -> String {
    let mut fields = Vec::new();

    if flags.is_request_options {
        fields.push(Field::Spread("options".into()));
    }
    fields.push(Field::Entry("method".into(), format!("'{}'", op.verb.as_str())));

    // The headers object is only built when something contributes to it;
    // a bare spread of the caller's headers would be redundant with the
    // options spread above.
    let mut headers = Vec::new();
    if op.body.is_some() && encoding.is_json() {
        headers.push(Field::Entry("'Content-Type'".into(), "'application/json'".into()));
    }
    if encoding.data_ref.as_deref() == Some("formUrlEncoded") {
        headers.push(Field::Entry(
            "'Content-Type'".into(),
            "'application/x-www-form-urlencoded'".into(),
        ));
    }
    if op.param_of_kind(ParamKind::Header).is_some() {
        headers.push(Field::Spread("headers".into()));
    }
    if !headers.is_empty() {
        if flags.is_request_options {
            headers.push(Field::Spread("options?.headers".into()));
        }
        fields.push(Field::Entry("headers".into(), object(&headers)));
    }

    if let Some(data_ref) = &encoding.data_ref {
        let body_expr = if encoding.is_json() {
            format!("JSON.stringify({data_ref})")
        } else {
            data_ref.clone()
        };
        fields.push(Field::Entry("body".into(), body_expr));
    }

    if flags.signal && !flags.is_request_options {
        fields.push(signal_config_field(flags.exact_optional));
    }

    object(&fields)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::operation::{Param, Response};

    fn op(verb: Verb, route: &str, params: Vec<Param>) -> OperationDescriptor {
        OperationDescriptor {
            name: "listPets".into(),
            verb,
            route: route.into(),
            params,
            body: None,
            response: Response {
                success: Some("Pet[]".into()),
                ..Response::default()
            },
            params_serializer: None,
        }
    }

    fn query_bag() -> Param {
        Param {
            name: "params".into(),
            ty: "ListPetsParams".into(),
            required: false,
            kind: ParamKind::Query,
        }
    }

    #[test]
    fn test_axios_simple_get() {
        let op = op(Verb::Get, "/pets", vec![]);
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        assert_eq!(
            code,
            "export const listPets = (options?: AxiosRequestConfig): Promise<AxiosResponse<Pet[]>> => {\n  return axios.get(`/pets`, options);\n};\n"
        );
    }

    #[test]
    fn test_axios_merges_params_with_options() {
        let op = op(Verb::Get, "/pets", vec![query_bag()]);
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        assert!(
            code.contains("{ ...options, params: { ...params, ...options?.params } }"),
            "Generated:\n{code}"
        );
    }

    #[test]
    fn test_axios_signal_without_options_param() {
        let mut cfg = OverrideConfig::default();
        cfg.request_options = false;
        let op = op(Verb::Get, "/pets", vec![]);
        let code = generate_axios_request_function(&op, &cfg, &GenerationContext::default());
        assert!(code.contains("(signal?: AbortSignal)"), "Generated:\n{code}");
        assert!(code.contains("{ signal }"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_exact_optional_signal_is_conditionally_spread() {
        let mut cfg = OverrideConfig::default();
        cfg.request_options = false;
        let ctx = GenerationContext {
            exact_optional_property_types: true,
            ..GenerationContext::default()
        };
        let op = op(Verb::Get, "/pets", vec![]);
        let code = generate_axios_request_function(&op, &cfg, &ctx);
        assert!(code.contains("...(signal ? { signal } : {})"), "Generated:\n{code}");
        assert!(!code.contains("signal: undefined"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_url_encoded_route() {
        let ctx = GenerationContext {
            url_encode_parameters: true,
            ..GenerationContext::default()
        };
        let op = op(
            Verb::Get,
            "/pets/{petId}",
            vec![Param {
                name: "petId".into(),
                ty: "string".into(),
                required: true,
                kind: ParamKind::Path,
            }],
        );
        let code = generate_axios_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(
            code.contains("`/pets/${encodeURIComponent(String(petId))}`"),
            "Generated:\n{code}"
        );
    }

    #[test]
    fn test_axios_synthetic_default_imports_disabled() {
        let ctx = GenerationContext {
            allow_synthetic_default_imports: false,
            ..GenerationContext::default()
        };
        let op = op(Verb::Get, "/pets", vec![]);
        let code = generate_axios_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("return axios.default.get("), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_delete_body_rides_in_config() {
        let mut op = op(Verb::Delete, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: None,
            form_url_encoded: None,
        });
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        assert!(code.contains("data: pet"), "Generated:\n{code}");
        assert!(code.contains("return axios.delete(`/pets`, { ...options, data: pet });"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_form_data_statement_injected_before_call() {
        let mut op = op(Verb::Post, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: Some("const formData = new FormData();\nformData.append('name', pet.name);".into()),
            form_url_encoded: None,
        });
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        let form_pos = code.find("const formData = new FormData()").unwrap();
        let call_pos = code.find("return axios.post").unwrap();
        assert!(form_pos < call_pos, "Generated:\n{code}");
        assert!(code.contains("axios.post(`/pets`, formData, options)"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_form_url_encoded_statement_injected_before_call() {
        let mut op = op(Verb::Post, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: None,
            form_url_encoded: Some(
                "const formUrlEncoded = new URLSearchParams();\nformUrlEncoded.append('name', pet.name);".into(),
            ),
        });
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        let encode_pos = code.find("const formUrlEncoded = new URLSearchParams()").unwrap();
        let call_pos = code.find("return axios.post").unwrap();
        assert!(encode_pos < call_pos, "Generated:\n{code}");
        assert!(code.contains("axios.post(`/pets`, formUrlEncoded, options)"), "Generated:\n{code}");
    }

    #[test]
    fn test_form_data_wins_over_form_url_encoded() {
        let body = Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: Some("const formData = new FormData();".into()),
            form_url_encoded: Some("const formUrlEncoded = new URLSearchParams();".into()),
        };
        let op = op(Verb::Post, "/pets", vec![]);
        let flags = EmitterFlags::resolve(&op, &OverrideConfig::default(), &GenerationContext::default());
        let encoding = BodyEncoding::resolve(Some(&body), flags);
        assert_eq!(encoding.data_ref.as_deref(), Some("formData"));
        assert_eq!(encoding.statement.as_deref(), Some("const formData = new FormData();"));
    }

    #[test]
    fn test_form_url_encoded_disabled_falls_back_to_json() {
        let mut cfg = OverrideConfig::default();
        cfg.form_url_encoded = false;
        let mut op = op(Verb::Post, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: None,
            form_url_encoded: Some("const formUrlEncoded = new URLSearchParams();".into()),
        });
        let code = generate_axios_request_function(&op, &cfg, &GenerationContext::default());
        assert!(!code.contains("formUrlEncoded"), "Generated:\n{code}");
        assert!(code.contains("axios.post(`/pets`, pet, options)"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_form_data_disabled_falls_back_to_json() {
        let mut cfg = OverrideConfig::default();
        cfg.form_data.disabled = true;
        let mut op = op(Verb::Post, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: Some("const formData = new FormData();".into()),
            form_url_encoded: None,
        });
        let code = generate_axios_request_function(&op, &cfg, &GenerationContext::default());
        assert!(!code.contains("formData"), "Generated:\n{code}");
        assert!(code.contains("axios.post(`/pets`, pet, options)"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_vue_wraps_and_unrefs_props() {
        let ctx = GenerationContext {
            target: OutputTarget::Vue,
            ..GenerationContext::default()
        };
        let op = op(
            Verb::Get,
            "/pets/{petId}",
            vec![Param {
                name: "petId".into(),
                ty: "string".into(),
                required: true,
                kind: ParamKind::Path,
            }],
        );
        let code = generate_axios_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("petId: MaybeRef<string>"), "Generated:\n{code}");
        assert!(code.contains("petId = unref(petId);"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_params_serializer_options() {
        let mut cfg = OverrideConfig::default();
        cfg.params_serializer_options = Some(crate::config::ParamsSerializerOptions {
            qs: Some(serde_json::json!({"arrayFormat": "comma"})),
        });
        let op = op(Verb::Get, "/pets", vec![query_bag()]);
        let code = generate_axios_request_function(&op, &cfg, &GenerationContext::default());
        assert!(
            code.contains(r#"paramsSerializer: (params) => qs.stringify(params, {"arrayFormat":"comma"})"#),
            "Generated:\n{code}"
        );
    }

    #[test]
    fn test_axios_named_params_serializer_wins() {
        let mut op = op(Verb::Get, "/pets", vec![query_bag()]);
        op.params_serializer = Some("customSerializer".into());
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        assert!(code.contains("paramsSerializer: customSerializer"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_export_gated_by_override() {
        let mut cfg = OverrideConfig::default();
        cfg.query.should_export_http_client = false;
        let op = op(Verb::Get, "/pets", vec![]);
        let code = generate_axios_request_function(&op, &cfg, &GenerationContext::default());
        assert!(code.starts_with("const listPets"), "Generated:\n{code}");
    }

    #[test]
    fn test_axios_unknown_success_placeholder() {
        let mut op = op(Verb::Get, "/pets", vec![]);
        op.response.success = None;
        let code =
            generate_axios_request_function(&op, &OverrideConfig::default(), &GenerationContext::default());
        assert!(code.contains("Promise<AxiosResponse<unknown>>"), "Generated:\n{code}");
    }

    #[test]
    fn test_fetch_simple_get() {
        let ctx = GenerationContext {
            http_client: HttpClient::Fetch,
            ..GenerationContext::default()
        };
        let op = op(Verb::Get, "/pets", vec![]);
        let code = generate_fetch_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(
            code.contains("export const listPets = async (options?: RequestInit): Promise<{ data: Pet[] }> => {"),
            "Generated:\n{code}"
        );
        assert!(
            code.contains("const res = await fetch(`/pets`, { ...options, method: 'GET' });"),
            "Generated:\n{code}"
        );
        assert!(code.contains("throw new ApiError(res.status, res.statusText, parsed);"), "Generated:\n{code}");
        assert!(code.contains("return { data: await res.json() };"), "Generated:\n{code}");
    }

    #[test]
    fn test_fetch_query_bag_builds_url() {
        let ctx = GenerationContext {
            http_client: HttpClient::Fetch,
            ..GenerationContext::default()
        };
        let op = op(Verb::Get, "/pets", vec![query_bag()]);
        let code = generate_fetch_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("const searchParams = new URLSearchParams("), "Generated:\n{code}");
        assert!(
            code.contains("const url = queryString ? `/pets?${queryString}` : `/pets`;"),
            "Generated:\n{code}"
        );
        assert!(code.contains("await fetch(url, "), "Generated:\n{code}");
    }

    #[test]
    fn test_fetch_json_body_sets_content_type() {
        let ctx = GenerationContext {
            http_client: HttpClient::Fetch,
            ..GenerationContext::default()
        };
        let mut op = op(Verb::Post, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: None,
            form_url_encoded: None,
        });
        let code = generate_fetch_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("'Content-Type': 'application/json'"), "Generated:\n{code}");
        assert!(code.contains("body: JSON.stringify(pet)"), "Generated:\n{code}");
    }

    #[test]
    fn test_fetch_form_url_encoded_body_sets_content_type() {
        let ctx = GenerationContext {
            http_client: HttpClient::Fetch,
            ..GenerationContext::default()
        };
        let mut op = op(Verb::Post, "/pets", vec![]);
        op.body = Some(Body {
            definition: "Pet".into(),
            implementation: "pet".into(),
            form_data: None,
            form_url_encoded: Some("const formUrlEncoded = new URLSearchParams();".into()),
        });
        let code = generate_fetch_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("const formUrlEncoded = new URLSearchParams();"), "Generated:\n{code}");
        assert!(
            code.contains("'Content-Type': 'application/x-www-form-urlencoded'"),
            "Generated:\n{code}"
        );
        assert!(code.contains("body: formUrlEncoded"), "Generated:\n{code}");
        assert!(!code.contains("JSON.stringify"), "Generated:\n{code}");
    }

    #[test]
    fn test_fetch_blob_response() {
        let ctx = GenerationContext {
            http_client: HttpClient::Fetch,
            ..GenerationContext::default()
        };
        let mut op = op(Verb::Get, "/pets/export", vec![]);
        op.response.is_blob = true;
        let code = generate_fetch_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("Promise<{ data: Blob }>"), "Generated:\n{code}");
        assert!(code.contains("return { data: await res.blob() };"), "Generated:\n{code}");
    }

    #[test]
    fn test_fetch_text_response() {
        let ctx = GenerationContext {
            http_client: HttpClient::Fetch,
            ..GenerationContext::default()
        };
        let mut op = op(Verb::Get, "/pets/report", vec![]);
        op.response.content_types = vec!["text/plain".into()];
        let code = generate_fetch_request_function(&op, &OverrideConfig::default(), &ctx);
        assert!(code.contains("Promise<{ data: string }>"), "Generated:\n{code}");
        assert!(code.contains("return { data: await res.text() };"), "Generated:\n{code}");
    }
}
