//! Route dispatch.
//!
//! Once routing and content negotiation have settled on a single route, this
//! module resolves the handler's arguments from the route's static binding
//! table (path, query, header, form and body sources), builds the handler
//! context, and invokes the handler.

mod args;
mod dispatcher;
mod error;
mod handler;

// Re-export public items
pub use args::{Argument, CallArguments, ParamBinding, ParamSource};
pub use dispatcher::Dispatcher;
pub use error::Error;
pub use handler::{HandlerContext, HandlerFn, HandlerFuture, Payload, Renderable};
