//! Error types for dispatch.

use thiserror::Error;

use crate::http::Response;

/// Errors that can occur while dispatching a request to a handler.
#[derive(Debug, Error)]
pub enum Error {
    /// A handler aborted processing with a prebuilt response. This is the
    /// one error the dispatcher recovers from: the carried response becomes
    /// the dispatch result.
    #[error("Request aborted by handler")]
    Abort(Response),

    /// A handler result could not be turned into a response representation.
    #[error("Malformed resource representation: {0}")]
    MalformedRepresentation(String),

    /// An argument was requested at a position the binding table never
    /// resolved.
    #[error("No argument resolved at position {0}")]
    MissingArgument(usize),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
