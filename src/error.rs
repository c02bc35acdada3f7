//! Error types surfaced by descriptor validation and configuration loading.

/// Errors produced while validating operation descriptors or loading an
/// override configuration.
///
/// Emission itself is total: once a descriptor passes validation, every
/// generator function returns plain text and cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A route template references a parameter that no `Path` prop binds.
    #[error("route parameter `{param}` of operation `{operation}` is not bound by a path prop")]
    UnboundRouteParam {
        /// Operation identifier.
        operation: String,
        /// Unbound route parameter name.
        param: String,
    },

    /// Two props of one operation share a name.
    #[error("duplicate parameter `{param}` in operation `{operation}`")]
    DuplicateParam {
        /// Operation identifier.
        operation: String,
        /// Duplicated prop name.
        param: String,
    },

    /// The override configuration could not be deserialized.
    #[error("invalid override configuration: {0}")]
    Config(#[from] serde_json::Error),
}
