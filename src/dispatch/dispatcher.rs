//! Route dispatch: argument resolution and handler invocation.

use log::debug;

use crate::dispatch::args::{Argument, CallArguments, ParamSource};
use crate::dispatch::error::Error;
use crate::dispatch::handler::{HandlerContext, Payload};
use crate::http::Request;
use crate::routing::{PathParams, Route};
use crate::uri::UriInfo;

/// Executes the handler of a selected route.
///
/// The dispatcher resolves the route's binding table into positional call
/// arguments, hands the handler its context, and recovers exactly one error
/// kind: a handler abort, whose carried response becomes the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch a request to the route's handler.
    ///
    /// # Arguments
    ///
    /// * `route` - The route selected after routing and negotiation
    /// * `params` - The path parameters captured for this route
    /// * `request` - The incoming request
    /// * `uri_info` - URI information for the matched route
    ///
    /// # Returns
    ///
    /// The handler's payload. A handler that fails with [`Error::Abort`]
    /// has its response substituted as the payload; every other error
    /// propagates to the caller.
    pub async fn dispatch(
        &self,
        route: &Route,
        params: &PathParams,
        request: &Request,
        uri_info: &UriInfo,
    ) -> Result<Payload, Error> {
        let args = resolve_arguments(route, params, request);
        debug!(
            "dispatching {method} {path} with {count} bound argument(s)",
            method = route.method(),
            path = route.template().path(),
            count = args.len()
        );

        let ctx = HandlerContext {
            request: request.clone(),
            uri_info: uri_info.clone(),
        };

        match (route.handler())(args, ctx).await {
            Err(Error::Abort(response)) => Ok(Payload::Response(response)),
            other => other,
        }
    }
}

/// Resolve the route's binding table against the request.
///
/// Each parameter position is looked up in its declared source only; a
/// lookup that yields nothing leaves the slot unresolved. The form source
/// decodes the body as `application/x-www-form-urlencoded` regardless of
/// the declared content type.
fn resolve_arguments(route: &Route, params: &PathParams, request: &Request) -> CallArguments {
    // parse the form body once, and only when a binding needs it
    let form_params = route
        .bindings()
        .iter()
        .any(|binding| binding.source == ParamSource::Form)
        .then(|| request.form_params());

    let mut args = CallArguments::default();
    for binding in route.bindings() {
        let argument = match binding.source {
            ParamSource::Body => Some(Argument::Body {
                content: request.body.clone(),
                media_type: request.content_type(),
            }),
            ParamSource::Path => params
                .get(&binding.name)
                .map(|value| Argument::Value(value.to_string())),
            ParamSource::Query => request
                .get_query_param(&binding.name)
                .map(|value| Argument::Value(value.clone())),
            ParamSource::Header => request
                .get_header(&binding.name)
                .map(|value| Argument::Value(value.clone())),
            ParamSource::Form => form_params
                .as_ref()
                .and_then(|form| form.get(&binding.name))
                .map(|value| Argument::Value(value.clone())),
        };
        args.push(argument);
    }
    args
}
