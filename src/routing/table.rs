//! Ordered route collection.

use crate::routing::route::Route;

/// An ordered collection of routes plus an optional base path.
///
/// Routes are kept in declaration order; the router iterates them in exactly
/// this order, which makes candidate construction deterministic. A table is
/// built once at configuration time and is read-only during request
/// processing, so it can be shared freely across concurrently handled
/// requests.
#[derive(Default)]
pub struct RouteTable {
    base_path: String,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty route table with no base path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path stripped from incoming request paths before
    /// matching. Normalized to a leading slash and no trailing slash; an
    /// empty value disables stripping.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_matches('/');
        self.base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    /// Add a route to the table.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// The registered routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The configured base path ("" when unset).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Strip the base path from the front of a request path.
    ///
    /// Only a leading occurrence is removed; paths that do not start with
    /// the base path are returned unchanged, which makes stripping
    /// idempotent.
    pub fn strip_base_path<'a>(&self, path: &'a str) -> &'a str {
        if self.base_path.is_empty() {
            return path;
        }
        path.strip_prefix(&self.base_path).unwrap_or(path)
    }
}
