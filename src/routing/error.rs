//! Error types for routing.

use thiserror::Error;

use crate::http::Method;

/// Errors raised while building routes at configuration time.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A template variable carries a regular expression constraint that does
    /// not compile.
    #[error("Invalid constraint in path segment '{segment}': {source}")]
    InvalidConstraint {
        segment: String,
        source: regex::Error,
    },
}

/// Typed failures produced by the router's filter stages.
///
/// Each kind maps to a distinct transport status code: 404, 405 and 415.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route template's path matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path matched but no candidate accepts the request method. Carries
    /// the distinct set of methods the matched routes do accept, for `Allow`
    /// reporting.
    #[error("Method {method} not allowed for path: {path}")]
    MethodNotAllowed {
        method: Method,
        path: String,
        allowed: Vec<Method>,
    },

    /// The request body's content type matched no candidate's consumable
    /// media types.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}
