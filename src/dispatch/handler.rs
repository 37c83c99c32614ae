//! Handler abstractions.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::dispatch::args::CallArguments;
use crate::dispatch::error::Error;
use crate::http::{MediaType, Request, Response};
use crate::uri::UriInfo;

/// A value that can move between its in-memory form and a rendered
/// representation in a given media type.
///
/// Implementations typically delegate to serde for the formats they support
/// and return [`Error::MalformedRepresentation`] for the ones they don't.
pub trait Renderable: Send {
    /// Render this value into a representation of the given media type.
    fn render(&self, media_type: &MediaType) -> Result<Vec<u8>, Error>;

    /// Reconstruct an instance from a rendered representation.
    fn unrender(content: &[u8], media_type: &MediaType) -> Result<Self, Error>
    where
        Self: Sized;
}

/// The result a handler produces.
pub enum Payload {
    /// A scalar value, sent as the response body with the negotiated
    /// content type.
    Text(String),
    /// A complete response, passed through unchanged.
    Response(Response),
    /// A value rendered through [`Renderable`] with the negotiated media
    /// type.
    Renderable(Box<dyn Renderable>),
}

impl Payload {
    /// Wrap a renderable value.
    pub fn renderable<T: Renderable + 'static>(value: T) -> Self {
        Payload::Renderable(Box::new(value))
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<Response> for Payload {
    fn from(value: Response) -> Self {
        Payload::Response(value)
    }
}

/// Framework context handed to every handler alongside its arguments: the
/// current request and URI information for the matched route.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    /// The current request.
    pub request: Request,
    /// URI information for the matched route.
    pub uri_info: UriInfo,
}

/// Type alias for a boxed future that returns a Result<Payload, Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Payload, Error>> + Send>>;

/// Type alias for a handler function that takes resolved call arguments and
/// a context and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(CallArguments, HandlerContext) -> HandlerFuture + Send + Sync>;
