//! Error/response-type composition for generated function signatures.

use crate::config::{HttpClient, Mutator};
use crate::operation::Response;

use super::utils::pascal;

/// Deduplicate a union type string: `"A | B | B | A"` -> `"A | B"`.
///
/// Alternatives keep first-seen order; empty alternatives are dropped. The
/// transform is idempotent.
pub fn dedupe_union(types: &str) -> String {
    let mut seen = Vec::new();
    for alternative in types.split('|') {
        let alternative = alternative.trim();
        if !alternative.is_empty() && !seen.contains(&alternative) {
            seen.push(alternative);
        }
    }
    seen.join(" | ")
}

/// Final type text for a function's error channel.
///
/// A custom transport with its own error wrapper takes precedence; the
/// shared default mutator's wrapper is prefixed with the operation name so
/// generated aliases stay unique per operation. The built-in axios client
/// wraps errors in its native `AxiosError` envelope; fetch leaves the union
/// bare.
pub fn error_type(
    operation_name: &str,
    response: &Response,
    http_client: HttpClient,
    mutator: Option<&Mutator>,
) -> String {
    let errors = dedupe_union(response.errors.as_deref().unwrap_or("unknown"));
    let errors = if errors.is_empty() { "unknown".to_string() } else { errors };

    match mutator {
        Some(m) => {
            if m.has_error_type {
                let prefix = if m.default { pascal(operation_name) } else { String::new() };
                format!("{prefix}ErrorType<{errors}>")
            } else {
                errors
            }
        }
        None => match http_client {
            HttpClient::Axios => format!("AxiosError<{errors}>"),
            HttpClient::Fetch => errors,
        },
    }
}
