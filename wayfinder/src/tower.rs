//! Tower integration for wayfinder.
//!
//! [`RouteLayer`] resolves every `http::Request` against a shared [`Router`]
//! and stores the outcome as a [`Resolved`] request extension before the
//! inner service runs. Requests that match no route pass through untouched,
//! so the inner service decides what "not found" looks like.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tower::ServiceBuilder;
//! use wayfinder::tower::{RouteLayer, Resolved};
//!
//! let service = ServiceBuilder::new()
//!     .layer(RouteLayer::new(Arc::new(router)))
//!     .service_fn(|req: http::Request<()>| async move {
//!         let resolved = req.extensions().get::<Resolved>().cloned();
//!         Ok::<_, std::convert::Infallible>(resolved)
//!     });
//! ```

use crate::{Params, RouteMatch, Router};
use http::Request;
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// An owned copy of a [`RouteMatch`], stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<H = ()> {
    /// Registration index of the matched route.
    pub index: usize,
    /// Template of the matched route.
    pub template: String,
    /// Matched module, if any.
    pub module: Option<String>,
    /// Matched controller; `None` for handler routes.
    pub controller: Option<String>,
    /// Matched action; `None` for handler routes.
    pub action: Option<String>,
    /// Remaining parameters.
    pub params: Params,
    /// A clone of the route's direct handler.
    pub handler: Option<H>,
}

impl<H: Clone> From<RouteMatch<'_, H>> for Resolved<H> {
    fn from(found: RouteMatch<'_, H>) -> Self {
        Self {
            index: found.index(),
            template: found.route().template().as_str().to_owned(),
            module: found.module().map(str::to_owned),
            controller: found.controller().map(str::to_owned),
            action: found.action().map(str::to_owned),
            handler: found.handler().cloned(),
            params: found.into_params(),
        }
    }
}

/// A tower [`Layer`] that routes requests with a shared [`Router`].
pub struct RouteLayer<H> {
    router: Arc<Router<H>>,
}

impl<H> RouteLayer<H> {
    /// Create a layer over `router`.
    pub fn new(router: Arc<Router<H>>) -> Self {
        Self { router }
    }
}

impl<H> Clone for RouteLayer<H> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<S, H> Layer<S> for RouteLayer<H> {
    type Service = RouteService<S, H>;

    fn layer(&self, inner: S) -> Self::Service {
        RouteService {
            inner,
            router: Arc::clone(&self.router),
        }
    }
}

/// The service produced by [`RouteLayer`].
pub struct RouteService<S, H> {
    inner: S,
    router: Arc<Router<H>>,
}

impl<S, H> RouteService<S, H> {
    /// Get a reference to the inner service.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get the router.
    pub fn router(&self) -> &Router<H> {
        &self.router
    }
}

impl<S: Clone, H> Clone for RouteService<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            router: Arc::clone(&self.router),
        }
    }
}

impl<S, H, B> Service<Request<B>> for RouteService<S, H>
where
    S: Service<Request<B>>,
    H: Clone + Send + Sync + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        match self.router.handle(&request).map(Resolved::from) {
            Some(resolved) => {
                request.extensions_mut().insert(resolved);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    method = %request.method(),
                    path = request.uri().path(),
                    "request passed through unrouted"
                );
            }
        }
        self.inner.call(request)
    }
}
