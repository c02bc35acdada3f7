//! Caching-layer glue fragments.
//!
//! These pure functions produce the auxiliary text fragments an out-of-scope
//! hook assembler composes into the final reactive-caching hooks: option-bag
//! destructurings, mutation keys, argument lists, and the hook options type
//! members.

use crate::config::{GenerationContext, HttpClient, Mutator, OutputTarget};
use crate::operation::Param;

use super::options::second_parameter_type;

/// The `SecondParameter<T>` helper alias, emitted once per generated file
/// when any mutator accepts a second argument.
pub const SECOND_PARAMETER: &str =
    "type SecondParameter<T extends (...args: never) => unknown> = Parameters<T>[1];";

/// One export of a generated-file dependency declaration.
#[derive(Debug, Clone, Copy)]
pub struct DependencyExport {
    pub name: &'static str,
    pub default: bool,
    pub values: bool,
    pub synthetic_default_import: bool,
}

/// Dependency declaration handed to the out-of-scope import assembler.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorDependency {
    pub dependency: &'static str,
    pub exports: &'static [DependencyExport],
}

/// Imports required by functions using the built-in axios client.
pub const AXIOS_DEPENDENCIES: &[GeneratorDependency] = &[GeneratorDependency {
    dependency: "axios",
    exports: &[
        DependencyExport {
            name: "axios",
            default: true,
            values: true,
            synthetic_default_import: true,
        },
        DependencyExport {
            name: "AxiosRequestConfig",
            default: false,
            values: false,
            synthetic_default_import: false,
        },
        DependencyExport {
            name: "AxiosResponse",
            default: false,
            values: false,
            synthetic_default_import: false,
        },
        DependencyExport {
            name: "AxiosError",
            default: false,
            values: false,
            synthetic_default_import: false,
        },
    ],
}];

fn builtin_options_binding(http_client: HttpClient) -> &'static str {
    match http_client {
        HttpClient::Axios => ", axios: axiosOptions",
        HttpClient::Fetch => ", fetch: fetchOptions",
    }
}

/// Destructuring statement pulling the per-concern option bags out of the
/// hook's options argument.
pub fn hook_options_destructure(
    is_request_options: bool,
    http_client: HttpClient,
    mutator: Option<&Mutator>,
) -> String {
    if !is_request_options {
        return String::new();
    }

    let mut value = String::from("const {query: queryOptions");
    match mutator {
        None => value.push_str(builtin_options_binding(http_client)),
        Some(m) if m.has_second_arg => value.push_str(", request: requestOptions"),
        Some(_) => {}
    }
    value.push_str("} = options ?? {};");
    value
}

/// Mutation-key declaration plus the destructure-with-default expression
/// that injects `mutationKey` unless the caller supplied one.
pub fn mutation_options_implementation(
    is_request_options: bool,
    http_client: HttpClient,
    operation_name: &str,
    mutator: Option<&Mutator>,
) -> String {
    if !is_request_options {
        return String::new();
    }

    let options_binding = match mutator {
        None => builtin_options_binding(http_client),
        Some(m) if m.has_second_arg => ", request: requestOptions",
        Some(_) => "",
    };
    let fallback_bag = match mutator {
        None => match http_client {
            HttpClient::Axios => ", axios: undefined",
            HttpClient::Fetch => ", fetch: undefined",
        },
        Some(m) if m.has_second_arg => ", request: undefined",
        Some(_) => "",
    };

    let mut code = format!("const mutationKey = ['{operation_name}'];\n");
    code.push_str(&format!(
        "const {{mutation: mutationOptions{options_binding}}} = options ?\n"
    ));
    code.push_str("  options.mutation && 'mutationKey' in options.mutation && options.mutation.mutationKey ?\n");
    code.push_str("  options\n");
    code.push_str("  : {...options, mutation: {...options.mutation, mutationKey}}\n");
    code.push_str(&format!("  : {{mutation: {{ mutationKey }}{fallback_bag}}};"));
    code
}

/// Trailing argument the mutation hook passes to the request function.
pub fn mutation_request_args(
    is_request_options: bool,
    http_client: HttpClient,
    mutator: Option<&Mutator>,
) -> String {
    if !is_request_options {
        return String::new();
    }

    match mutator {
        None => match http_client {
            HttpClient::Axios => "axiosOptions".to_string(),
            HttpClient::Fetch => "fetchOptions".to_string(),
        },
        Some(m) if m.has_second_arg => "requestOptions".to_string(),
        Some(_) => String::new(),
    }
}

/// The request-options member of the hook options type.
pub fn arguments_request_type(
    http_client: HttpClient,
    mutator: Option<&Mutator>,
    is_angular: bool,
) -> String {
    match mutator {
        None => {
            if is_angular {
                // Angular HttpClient has no unified options interface.
                "fetch?: Record<string, any>".to_string()
            } else {
                match http_client {
                    HttpClient::Axios => "axios?: AxiosRequestConfig".to_string(),
                    HttpClient::Fetch => "fetch?: RequestInit".to_string(),
                }
            }
        }
        Some(m) if m.has_second_arg => format!("request?: {}", second_parameter_type(m)),
        Some(_) => String::new(),
    }
}

/// Prop list as passed from the hook to the request function.
pub fn hook_call_properties(ctx: &GenerationContext, params: &[Param]) -> String {
    match ctx.target {
        OutputTarget::Vue if ctx.http_client == HttpClient::Fetch => params
            .iter()
            .map(|p| format!("unref({})", p.name))
            .collect::<Vec<_>>()
            .join(", "),
        // Angular props arrive as signals that must be invoked.
        OutputTarget::Angular => params
            .iter()
            .map(|p| {
                if p.required {
                    format!("{}()", p.name)
                } else {
                    format!("{}?.()", p.name)
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => params.iter().map(|p| p.name.clone()).collect::<Vec<_>>().join(", "),
    }
}
