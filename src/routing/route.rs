//! Route descriptors.

use std::future::Future;
use std::sync::Arc;

use crate::dispatch::{
    CallArguments, Error as DispatchError, HandlerContext, HandlerFn, HandlerFuture, ParamBinding,
    ParamSource, Payload,
};
use crate::http::{MediaType, Method};
use crate::routing::error::RouteError;
use crate::routing::template::PathTemplate;

/// A registered route: a compiled path template, an HTTP method, media type
/// constraints, an argument binding table and the handler to invoke.
///
/// Routes are immutable once registered and are reused across requests.
/// Several routes may share the same path and method with different
/// `consumes`/`produces` sets; content negotiation picks between them.
pub struct Route {
    template: PathTemplate,
    method: Method,
    consumes: Vec<MediaType>,
    produces: Vec<MediaType>,
    bindings: Vec<ParamBinding>,
    handler: HandlerFn,
}

impl Route {
    /// Create a new route.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to match
    /// * `template` - The path template, e.g. `/users/{id:\d+}`
    /// * `handler` - The handler invoked with the resolved call arguments
    ///
    /// # Returns
    ///
    /// The route, consuming and producing `*/*` until narrowed with
    /// [`Route::with_consumes`] / [`Route::with_produces`], or a
    /// [`RouteError`] when the template fails to compile.
    pub fn new<F, Fut>(method: Method, template: &str, handler: F) -> Result<Self, RouteError>
    where
        F: Fn(CallArguments, HandlerContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Payload, DispatchError>> + Send + 'static,
    {
        let template = PathTemplate::compile(template)?;
        let handler: HandlerFn =
            Arc::new(move |args: CallArguments, ctx: HandlerContext| -> HandlerFuture {
                Box::pin(handler(args, ctx))
            });

        Ok(Self {
            template,
            method,
            consumes: vec![MediaType::wildcard()],
            produces: vec![MediaType::wildcard()],
            bindings: Vec::new(),
            handler,
        })
    }

    /// Replace the set of request media types this route accepts.
    pub fn with_consumes(mut self, consumes: Vec<MediaType>) -> Self {
        self.consumes = consumes;
        self
    }

    /// Replace the set of response media types this route can produce.
    pub fn with_produces(mut self, produces: Vec<MediaType>) -> Self {
        self.produces = produces;
        self
    }

    /// Append one handler parameter binding. Bindings are positional: the
    /// first call describes the handler's first argument slot, and so on.
    pub fn with_binding(mut self, source: ParamSource, name: impl Into<String>) -> Self {
        self.bindings.push(ParamBinding::new(source, name));
        self
    }

    /// The compiled path template.
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// The HTTP method this route matches.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The request media types this route accepts.
    pub fn consumes(&self) -> &[MediaType] {
        &self.consumes
    }

    /// The response media types this route can produce.
    pub fn produces(&self) -> &[MediaType] {
        &self.produces
    }

    /// The positional argument binding table.
    pub fn bindings(&self) -> &[ParamBinding] {
        &self.bindings
    }

    /// The handler function.
    pub fn handler(&self) -> &HandlerFn {
        &self.handler
    }
}
