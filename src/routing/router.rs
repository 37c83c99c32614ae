//! Request routing.

use log::debug;

use crate::http::Request;
use crate::routing::error::RouterError;
use crate::routing::route::Route;
use crate::routing::table::RouteTable;
use crate::routing::template::PathParams;

/// One route that survived the router's filter stages, together with the
/// path parameters its own template extracted.
///
/// Parameters are carried per candidate; the final parameter set is the one
/// attached to whichever candidate content negotiation ultimately selects.
pub struct RouteMatch<'a> {
    /// The surviving route.
    pub route: &'a Route,
    /// The parameters extracted by this route's template.
    pub params: PathParams,
}

/// Matches incoming requests against a [`RouteTable`].
///
/// Filtering is sequential: path, then method, then consumed media type.
/// Each stage operates on the survivors of the previous one and the stage
/// that empties the candidate set determines the failure kind, so a POST to
/// a GET-only path reports `MethodNotAllowed` rather than `NotFound`.
pub struct Router<'a> {
    table: &'a RouteTable,
}

impl<'a> Router<'a> {
    /// Create a router over a route table.
    pub fn new(table: &'a RouteTable) -> Self {
        Self { table }
    }

    /// Find candidate routes for an incoming request.
    ///
    /// # Arguments
    ///
    /// * `request` - The incoming request
    ///
    /// # Returns
    ///
    /// The non-empty candidate list in declaration order, or the
    /// [`RouterError`] kind for the stage that eliminated every candidate.
    pub fn match_request(&self, request: &Request) -> Result<Vec<RouteMatch<'a>>, RouterError> {
        // drop the base path from the beginning of the incoming path
        let request_path = self.table.strip_base_path(&request.path);

        // locate matching routes using the incoming request path
        let mut candidates: Vec<RouteMatch<'a>> = Vec::new();
        for route in self.table.routes() {
            if let Some(params) = route.template().matches(request_path) {
                candidates.push(RouteMatch { route, params });
            }
        }

        if candidates.is_empty() {
            debug!("no route matches path {request_path}");
            return Err(RouterError::NotFound(request_path.to_string()));
        }
        debug!(
            "{count} route(s) match path {request_path}",
            count = candidates.len()
        );

        // filter candidate routes further by matching the incoming request
        // method; remember the distinct methods seen for Allow reporting
        let mut allowed = Vec::new();
        for candidate in &candidates {
            if !allowed.contains(&candidate.route.method()) {
                allowed.push(candidate.route.method());
            }
        }
        candidates.retain(|candidate| candidate.route.method() == request.method);

        if candidates.is_empty() {
            debug!(
                "method {method} not allowed for path {request_path}, allowed: {allowed:?}",
                method = request.method
            );
            return Err(RouterError::MethodNotAllowed {
                method: request.method,
                path: request_path.to_string(),
                allowed,
            });
        }

        // filter candidate routes further by matching the incoming media
        // type; requests without a content type skip this stage
        if let Some(content_type) = request.content_type() {
            candidates.retain(|candidate| {
                candidate
                    .route
                    .consumes()
                    .iter()
                    .any(|consumed| consumed.is_compatible(&content_type))
            });

            if candidates.is_empty() {
                debug!("no candidate consumes media type {content_type}");
                return Err(RouterError::UnsupportedMediaType(content_type.to_string()));
            }
        }

        Ok(candidates)
    }
}
