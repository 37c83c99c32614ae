//! Request routing.
//!
//! This module matches incoming requests against registered route templates.
//! Matching proceeds in stages over an ordered [`RouteTable`]: the request
//! path against each compiled [`PathTemplate`], then the HTTP method, then
//! the request's content type against each candidate's consumable media
//! types. Every stage that empties the candidate set has its own typed
//! failure so callers can report 404, 405 and 415 distinctly.

mod error;
mod route;
mod router;
mod table;
mod template;

// Re-export public items
pub use error::{RouteError, RouterError};
pub use route::Route;
pub use router::{RouteMatch, Router};
pub use table::RouteTable;
pub use template::{PathParams, PathTemplate};
