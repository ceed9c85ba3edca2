//! Request-scoped routing state.
//!
//! [`Routing`] offers the classic `handle()` followed by accessor calls,
//! while keeping all match state local to one request. The shared
//! [`Router`] is only ever borrowed immutably.

use crate::router::{RouteMatch, Router, normalize_path};
use wayfinder_core::{Params, Request, Route};

/// The routing state of a single request.
///
/// # Example
///
/// ```rust
/// use wayfinder_core::Method;
/// use wayfinder_std::RouterBuilder;
///
/// let mut builder = RouterBuilder::<()>::new();
/// builder.route("[<controller>[/<action>]]", "home::index").unwrap();
/// let router = builder.build();
///
/// let mut routing = router.routing((Method::GET, "/blog"));
/// assert!(routing.handle(None));
/// assert_eq!(routing.controller(), Some("blog"));
/// assert_eq!(routing.action(), Some("index"));
///
/// // An explicit path overrides the request path.
/// assert!(routing.handle(Some("news/archive")));
/// assert_eq!(routing.action(), Some("archive"));
/// ```
pub struct Routing<'r, H, R> {
    router: &'r Router<H>,
    request: R,
    uri: Option<String>,
    matched: Option<RouteMatch<'r, H>>,
}

impl<'r, H: 'static, R: Request> Routing<'r, H, R> {
    /// Bind a router to a request. Nothing is resolved until [`handle`].
    ///
    /// [`handle`]: Routing::handle
    pub fn new(router: &'r Router<H>, request: R) -> Self {
        Self {
            router,
            request,
            uri: None,
            matched: None,
        }
    }

    /// Resolve `uri`, or the request path when `None`, using the request
    /// method. `Some("")` routes the root path. Replaces the outcome of any
    /// previous call.
    ///
    /// Returns `true` if a route matched.
    pub fn handle(&mut self, uri: Option<&str>) -> bool {
        self.matched = None;

        let uri = normalize_path(uri.unwrap_or_else(|| self.request.path())).to_owned();
        self.matched = self.router.resolve(&uri, self.request.method());
        self.uri = Some(uri);

        self.matched.is_some()
    }

    /// The normalized path of the last [`handle`](Routing::handle) call.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The request this context was opened for.
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Gets the name of module if given.
    pub fn module(&self) -> Option<&str> {
        self.matched.as_ref().and_then(RouteMatch::module)
    }

    /// Gets the name of controller.
    pub fn controller(&self) -> Option<&str> {
        self.matched.as_ref().and_then(RouteMatch::controller)
    }

    /// Gets the name of action.
    pub fn action(&self) -> Option<&str> {
        self.matched.as_ref().and_then(RouteMatch::action)
    }

    /// Gets one parameter. `None` if it was never captured or defaulted.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.matched.as_ref().and_then(|m| m.param(name))
    }

    /// Gets all parameters, or `None` if nothing matched.
    pub fn params(&self) -> Option<&Params> {
        self.matched.as_ref().map(RouteMatch::params)
    }

    /// Gets the matched route.
    pub fn matched_route(&self) -> Option<&'r Route<H>> {
        self.matched.as_ref().map(RouteMatch::route)
    }

    /// The full match of the last call.
    pub fn matched(&self) -> Option<&RouteMatch<'r, H>> {
        self.matched.as_ref()
    }

    /// Consume the context, keeping the last match.
    pub fn into_match(self) -> Option<RouteMatch<'r, H>> {
        self.matched
    }
}
