//! Minimal text-level TypeScript fragment model.
//!
//! Types reach this crate already rendered as text, so fragments store type
//! text verbatim. All structural decisions (parameter lists, object fields)
//! are made on these typed values; assembled source is never patched by
//! substring surgery.

/// Trait for emitting TypeScript source text from fragment values.
pub(crate) trait Emit {
    fn emit(&self) -> String;
}

/// Function parameter with verbatim type text.
#[derive(Debug, Clone)]
pub(crate) struct TsParam {
    pub name: String,
    pub ty: Option<String>,
    pub optional: bool,
}

impl TsParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            optional: true,
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{}: {}", self.name, opt, ty),
            None => format!("{}{}", self.name, opt),
        }
    }
}

/// Render a parameter list joined with `, `.
pub(crate) fn param_list(params: &[TsParam]) -> String {
    params.iter().map(Emit::emit).collect::<Vec<_>>().join(", ")
}

/// One field of an object literal.
#[derive(Debug, Clone)]
pub(crate) enum Field {
    /// `url`
    Shorthand(String),
    /// `method: 'GET'`
    Entry(String, String),
    /// `...options` or `...(signal ? { signal } : {})`
    Spread(String),
}

impl Emit for Field {
    fn emit(&self) -> String {
        match self {
            Field::Shorthand(name) => name.clone(),
            Field::Entry(key, value) => format!("{key}: {value}"),
            Field::Spread(expr) => format!("...{expr}"),
        }
    }
}

/// Render an object literal: `{}` when empty, `{ a, b: c, ...d }` otherwise.
pub(crate) fn object(fields: &[Field]) -> String {
    if fields.is_empty() {
        "{}".to_string()
    } else {
        let parts: Vec<_> = fields.iter().map(Emit::emit).collect();
        format!("{{ {} }}", parts.join(", "))
    }
}

/// Arrow-function definition bound to a `const`.
#[derive(Debug, Clone)]
pub(crate) struct FunctionDef {
    pub export: bool,
    pub name: String,
    pub params: Vec<TsParam>,
    pub return_type: Option<String>,
    /// Statements; each entry may span multiple lines.
    pub body: Vec<String>,
    pub is_async: bool,
}

impl Emit for FunctionDef {
    fn emit(&self) -> String {
        let export = if self.export { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = param_list(&self.params);
        let ret = self
            .return_type
            .as_ref()
            .map(|t| format!(": {t}"))
            .unwrap_or_default();

        let mut out = format!("{export}const {} = {async_kw}({params}){ret} => {{\n", self.name);
        for stmt in &self.body {
            out.push_str(&indent_block(stmt, 1));
        }
        out.push_str("};\n");
        out
    }
}

/// Render an inline arrow expression (no binding), used for nested closures.
pub(crate) fn arrow(params: &[TsParam], body: &[String]) -> String {
    let mut out = format!("({}) => {{\n", param_list(params));
    for stmt in body {
        out.push_str(&indent_block(stmt, 1));
    }
    out.push('}');
    out
}

/// Indent every line of a possibly multi-line statement by two spaces per
/// level; blank lines stay blank.
pub(crate) fn indent_block(stmt: &str, level: usize) -> String {
    if stmt.is_empty() {
        return "\n".to_string();
    }
    let prefix = "  ".repeat(level);
    stmt.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{prefix}{line}\n")
            }
        })
        .collect()
}
