//! Resolved per-operation input model.
//!
//! An [`OperationDescriptor`] is produced once per API operation by the
//! upstream schema-resolution stage and is read-only here. Types arrive
//! already rendered as TypeScript text; this module only parses the route
//! template and performs contract validation.

use crate::error::Error;

/// HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Verb {
    /// Upper-case wire form (`GET`, `POST`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
        }
    }

    /// Lower-case method name used on client objects (`axios.get`, `http.post`).
    pub fn method_name(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
            Verb::Head => "head",
        }
    }

    /// Read operations eligible for cancellation signals and query caching.
    pub fn is_query(self) -> bool {
        matches!(self, Verb::Get | Verb::Head)
    }

    /// Verbs whose body is passed positionally to the built-in clients.
    /// A `DELETE` body rides inside the request config as `data` instead.
    pub fn has_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }
}

/// Where a prop appears in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Path,
    Query,
    Header,
    Body,
}

/// One prop of the generated request function.
///
/// `ty` is TypeScript type text rendered by the upstream type-model builder;
/// it is carried verbatim and never parsed.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub required: bool,
    pub kind: ParamKind,
}

/// Request body descriptor.
#[derive(Debug, Clone)]
pub struct Body {
    /// Declared TypeScript type text (e.g. `Pet` or `Pet[]`).
    pub definition: String,
    /// Runtime reference passed to the transport (usually the prop name).
    pub implementation: String,
    /// Precomputed `FormData` assembly statement, when the operation has a
    /// multipart body.
    pub form_data: Option<String>,
    /// Precomputed `URLSearchParams` assembly statement for url-encoded bodies.
    pub form_url_encoded: Option<String>,
}

/// Response descriptor.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Success type text; `None` falls back to `unknown`.
    pub success: Option<String>,
    /// Raw error union text; may contain duplicate alternatives.
    pub errors: Option<String>,
    /// Response content types in declaration order.
    pub content_types: Vec<String>,
    /// Binary responses skip JSON parsing and generic type arguments.
    pub is_blob: bool,
}

/// One segment of a parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    Literal(String),
    Param(String),
}

/// Resolved, immutable description of a single API operation.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// Sanitized TypeScript identifier (e.g. `listPets`).
    pub name: String,
    pub verb: Verb,
    /// OpenAPI-style route template (`/pets/{petId}`).
    pub route: String,
    /// Ordered props of the generated function.
    pub params: Vec<Param>,
    pub body: Option<Body>,
    pub response: Response,
    /// Name of a user-supplied query-string serializer function.
    pub params_serializer: Option<String>,
}

impl OperationDescriptor {
    /// Render the route as the inner text of a TypeScript template literal,
    /// interpolating path parameters. With `url_encode` set, every parameter
    /// is routed through `encodeURIComponent`; literal segments are never
    /// altered.
    pub fn route_template(&self, url_encode: bool) -> String {
        let mut out = String::new();
        for segment in parse_route(&self.route) {
            match segment {
                RouteSegment::Literal(text) => out.push_str(&text),
                RouteSegment::Param(name) => {
                    if url_encode {
                        out.push_str(&format!("${{encodeURIComponent(String({name}))}}"));
                    } else {
                        out.push_str(&format!("${{{name}}}"));
                    }
                }
            }
        }
        out
    }

    /// First prop of the given kind, if any.
    pub fn param_of_kind(&self, kind: ParamKind) -> Option<&Param> {
        self.params.iter().find(|p| p.kind == kind)
    }

    /// Contract check on upstream output: every route parameter must be
    /// bound by a `Path` prop and prop names must be unique.
    pub fn validate(&self) -> Result<(), Error> {
        for segment in parse_route(&self.route) {
            if let RouteSegment::Param(name) = segment {
                let bound = self
                    .params
                    .iter()
                    .any(|p| p.kind == ParamKind::Path && p.name == name);
                if !bound {
                    return Err(Error::UnboundRouteParam {
                        operation: self.name.clone(),
                        param: name,
                    });
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        for param in &self.params {
            if !seen.insert(param.name.as_str()) {
                return Err(Error::DuplicateParam {
                    operation: self.name.clone(),
                    param: param.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Parse an OpenAPI-style route template into literal and parameter segments.
/// An unterminated `{` is kept as literal text; parsing is total.
pub fn parse_route(route: &str) -> Vec<RouteSegment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = route;

    while let Some(open) = rest.find('{') {
        let (before, after_open) = rest.split_at(open);
        literal.push_str(before);
        match after_open[1..].find('}') {
            Some(close) => {
                if !literal.is_empty() {
                    segments.push(RouteSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(RouteSegment::Param(after_open[1..=close].to_string()));
                rest = &after_open[close + 2..];
            }
            None => {
                literal.push_str(after_open);
                rest = "";
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(RouteSegment::Literal(literal));
    }

    segments
}
