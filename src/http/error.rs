//! Error types for the HTTP abstractions.

use thiserror::Error;

/// Errors that can occur while working with HTTP values.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP method is not supported.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A media type string is not of the form `type/subtype`.
    #[error("Invalid media type: {0}")]
    InvalidMediaType(String),

    /// The request body does not carry the expected content type.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// Error parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
