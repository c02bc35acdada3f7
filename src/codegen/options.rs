//! Request-options synthesizer.
//!
//! Pure total functions deciding the shape of the trailing options/signal
//! parameters and the expression that merges them into the final call. Every
//! branch is exhaustive over the transport variants, so the policy table is
//! testable per variant.

use crate::config::{HttpClient, Mutator, Transport};
use crate::operation::Verb;
use crate::ts::TsParam;

/// Whether a cancellation signal is threaded into the request. Signals only
/// apply to read operations the query layer can cancel.
pub fn has_signal(override_signal: bool, verb: Verb) -> bool {
    override_signal && verb.is_query()
}

/// Trailing function parameters appended after the operation props.
///
/// The built-in transports receive the signal through the options object, so
/// an explicit `signal` parameter only appears when the options parameter is
/// disabled or the transport is custom.
pub fn trailing_parameters(
    transport: Transport<'_>,
    is_request_options: bool,
    signal: bool,
    options_param_required: bool,
) -> Vec<TsParam> {
    if !is_request_options {
        return if signal {
            vec![TsParam::optional("signal", "AbortSignal")]
        } else {
            vec![]
        };
    }

    match transport {
        Transport::Builtin(HttpClient::Axios) => {
            vec![TsParam::optional("options", "AxiosRequestConfig")]
        }
        Transport::Builtin(HttpClient::Fetch) => {
            vec![TsParam::optional("options", "RequestInit")]
        }
        // Angular's HttpClient has no unified per-call options interface.
        Transport::Angular => vec![TsParam::optional("options", "Record<string, any>")],
        Transport::Custom(mutator) => {
            let mut params = Vec::new();
            if mutator.has_second_arg {
                let ty = second_parameter_type(mutator);
                params.push(TsParam {
                    name: "options".into(),
                    ty: Some(ty),
                    optional: !options_param_required,
                });
            }
            if signal {
                params.push(TsParam::optional("signal", "AbortSignal"));
            }
            params
        }
    }
}

/// The `SecondParameter<…>` type extracting a custom transport's second
/// argument type; hook factories are narrowed through `ReturnType` first.
pub fn second_parameter_type(mutator: &Mutator) -> String {
    if mutator.is_hook {
        format!("SecondParameter<ReturnType<typeof {}>>", mutator.name)
    } else {
        format!("SecondParameter<typeof {}>", mutator.name)
    }
}

/// Trailing argument text the hook layer passes into the request function.
///
/// When both a signal and per-call options are present they are combined in
/// a single object literal (or appended positionally for axios), never
/// dropping one of the two. Under exact-optional-property mode the signal is
/// conditionally spread so an explicit `undefined` is never emitted.
pub fn query_call_options(
    http_client: HttpClient,
    mutator: Option<&Mutator>,
    is_request_options: bool,
    signal: bool,
    exact_optional_property_types: bool,
) -> String {
    if mutator.is_none() && is_request_options {
        let options = match http_client {
            HttpClient::Axios => "axiosOptions",
            HttpClient::Fetch => "fetchOptions",
        };
        if !signal {
            return options.to_string();
        }
        let signal_field = signal_field(exact_optional_property_types);
        return format!("{{ {signal_field}, ...{options} }}");
    }

    if mutator.is_some_and(|m| m.has_second_arg) && is_request_options {
        if !signal {
            return "requestOptions".to_string();
        }
        return match http_client {
            HttpClient::Axios => "requestOptions, signal".to_string(),
            HttpClient::Fetch => "{ signal, ...requestOptions }".to_string(),
        };
    }

    if signal {
        return match http_client {
            HttpClient::Axios => "signal".to_string(),
            HttpClient::Fetch => "{ signal }".to_string(),
        };
    }

    String::new()
}

/// Signal field text for an options object literal.
pub(crate) fn signal_field(exact_optional_property_types: bool) -> &'static str {
    if exact_optional_property_types {
        "...(signal ? { signal } : {})"
    } else {
        "signal"
    }
}
