//! A minimal REST routing and content negotiation library.
//!
//! This library matches incoming HTTP requests against registered route
//! templates, negotiates a response representation against the client's
//! Accept preferences, and dispatches to async handlers with arguments
//! resolved from the request.
//!
//! # Features
//!
//! - Path templates with `{name}` and `{name:regex}` variable segments,
//!   including multiple variables inside a single segment
//! - Staged route filtering (path, then method, then content type) with
//!   distinct failure kinds for 404, 405 and 415 responses
//! - Accept-header content negotiation with quality factors, wildcard
//!   ranges and structured-subtype tie-breaking
//! - Explicit per-route argument binding tables covering path, query,
//!   header, form and body sources
//! - Async handlers returning scalars, complete responses or renderable
//!   values
//! - Proper error handling with descriptive error messages
//!
//! # Examples
//!
//! ## Routing and dispatch
//!
//! ```
//! use std::collections::HashMap;
//!
//! use microrest_rs::{Application, Method, ParamSource, Payload, Request, Route, RouteTable};
//!
//! let mut table = RouteTable::new();
//! let route = Route::new(Method::GET, r"/users/{id:\d+}", |args, _ctx| async move {
//!     let id = args.get_str(0).unwrap_or_default().to_string();
//!     Ok(Payload::from(format!("user {id}")))
//! })
//! .unwrap()
//! .with_binding(ParamSource::Path, "id");
//! table.add_route(route);
//!
//! let app = Application::new(table);
//! let request = Request::new(Method::GET, "/users/42", HashMap::new());
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let response = rt.block_on(app.run(request)).unwrap();
//! assert_eq!(response.body, b"user 42");
//! ```
//!
//! ## Content negotiation
//!
//! ```
//! use microrest_rs::{select_variant, MediaType, Variant};
//!
//! let variants = vec![
//!     Variant::new(MediaType::new("application", "xml")),
//!     Variant::new(MediaType::new("application", "html+xml")),
//! ];
//!
//! // Equal quality: the structured subtype wins the tie.
//! let selected = select_variant(Some("application/html+xml, application/xml"), &variants);
//! assert_eq!(selected, Some(1));
//! ```
//!
//! ## Failure signals
//!
//! ```
//! use std::collections::HashMap;
//!
//! use microrest_rs::{Application, Method, Payload, Request, Route, RouteTable, StatusCode};
//!
//! let mut table = RouteTable::new();
//! table.add_route(
//!     Route::new(Method::GET, "/ping", |_args, _ctx| async { Ok(Payload::from("pong")) })
//!         .unwrap(),
//! );
//!
//! let app = Application::new(table);
//! let rt = tokio::runtime::Runtime::new().unwrap();
//!
//! // Wrong verb on a known path: 405 with an Allow header, never 404.
//! let request = Request::new(Method::POST, "/ping", HashMap::new());
//! let response = rt.block_on(app.run(request)).unwrap();
//! assert_eq!(response.status, StatusCode::MethodNotAllowed);
//! assert_eq!(response.headers.get("Allow").unwrap(), "GET");
//! ```

// Export the HTTP value types
pub mod http;

// Export the routing engine
pub mod routing;

// Export content negotiation
pub mod negotiation;

// Export route dispatch
pub mod dispatch;

// Export URI information
pub mod uri;

// Export the per-request orchestrator
pub mod app;

// Re-export commonly used items for convenience
pub use app::Application;
pub use dispatch::{
    Argument, CallArguments, Dispatcher, Error as DispatchError, HandlerContext, HandlerFn,
    HandlerFuture, ParamBinding, ParamSource, Payload, Renderable,
};
pub use http::{Error as HttpError, MediaType, Method, Request, Response, StatusCode};
pub use negotiation::{parse_accept_header, select_variant, AcceptEntry, Variant};
pub use routing::{
    PathParams, PathTemplate, Route, RouteError, RouteMatch, RouteTable, Router, RouterError,
};
pub use uri::UriInfo;
