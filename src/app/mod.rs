//! Per-request orchestration.
//!
//! [`Application`] ties the pieces together: it routes an incoming request,
//! negotiates a response representation among the surviving candidates,
//! dispatches to the selected handler and assembles the final [`Response`].
//! Every typed routing failure maps to its distinct status code, so the
//! embedding transport can answer 404, 405, 415 and 406 without inspecting
//! anything beyond the returned response.

mod tests;

use log::debug;

use crate::dispatch::{Dispatcher, Error, Payload};
use crate::http::{Request, Response, StatusCode};
use crate::negotiation::{select_variant, Variant};
use crate::routing::{RouteTable, Router, RouterError};
use crate::uri::UriInfo;

/// The entry point for processing requests against a configured route table.
///
/// An application is stateless across requests: the route table is the only
/// shared resource and is never mutated after construction, so one
/// application may serve many requests sequentially (or be shared read-only
/// by a concurrent host).
pub struct Application {
    table: RouteTable,
}

impl Application {
    /// Create an application over a route table.
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// The route table this application serves.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Process one request to completion.
    ///
    /// # Arguments
    ///
    /// * `request` - The incoming request
    ///
    /// # Returns
    ///
    /// The response to write to the transport. Routing and negotiation
    /// failures become their status-code responses; handler and
    /// representation errors propagate as [`Error`] since they indicate
    /// configuration or handler bugs rather than request outcomes.
    pub async fn run(&self, request: Request) -> Result<Response, Error> {
        // attempt to find routes that match the current request
        let router = Router::new(&self.table);
        let candidates = match router.match_request(&request) {
            Ok(candidates) => candidates,
            Err(RouterError::NotFound(path)) => {
                debug!("{path} resolved to 404");
                return Ok(Response::new(StatusCode::NotFound));
            }
            Err(RouterError::MethodNotAllowed { allowed, .. }) => {
                let allow = allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Ok(Response::new(StatusCode::MethodNotAllowed).with_header("Allow", allow));
            }
            Err(RouterError::UnsupportedMediaType(_)) => {
                return Ok(Response::new(StatusCode::UnsupportedMediaType));
            }
        };

        // build the variant list: one entry per candidate producible media
        // type, in candidate order, remembering each variant's origin
        let mut variants = Vec::new();
        let mut origins = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            for media_type in candidate.route.produces() {
                variants.push(Variant::new(media_type.clone()));
                origins.push(index);
            }
        }

        // select a variant and find the corresponding candidate
        let accept = request.accept().map(String::as_str);
        let Some(selected) = select_variant(accept, &variants) else {
            return Ok(Response::new(StatusCode::NotAcceptable));
        };
        let media_type = variants[selected].media_type().clone();
        let winner = &candidates[origins[selected]];

        // URI information travels with the selected candidate's own
        // parameter captures
        let uri_info = UriInfo::new(
            self.table.base_path(),
            self.table.strip_base_path(&request.path),
            winner.params.clone(),
            request.query_params.clone(),
        );

        // execute the handler and assemble the response
        let payload = Dispatcher::new()
            .dispatch(winner.route, &winner.params, &request, &uri_info)
            .await?;

        Ok(match payload {
            Payload::Text(text) => Response::new(StatusCode::Ok)
                .with_content_type(media_type.to_string())
                .with_body_string(text),
            Payload::Response(response) => response,
            Payload::Renderable(value) => {
                let body = value.render(&media_type)?;
                Response::new(StatusCode::Ok)
                    .with_content_type(media_type.to_string())
                    .with_body_bytes(body)
            }
        })
    }
}
