//! # First-Match Router
//!
//! Scans routes in registration order and selects the first one whose
//! method restriction and compiled pattern both accept the request.
//! There is no most-specific-match heuristic: order is the tie-break.
//!
//! # Resolution steps
//!
//! For every route, in order:
//!
//! 1. skip if the route restricts methods and the request method is not listed;
//! 2. skip if the pattern does not match the normalized path;
//! 3. fill absent parameters from the route defaults;
//! 4. skip if `controller` or `action` is absent or empty and the route has
//!    no direct handler;
//! 5. run the route callbacks, in registration order, on parameters present;
//! 6. select the route and stop.
//!
//! A [`Router`] is immutable once built and holds no per-request state, so a
//! single instance can be shared across threads. Results are returned as
//! [`RouteMatch`] values.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::{Method, Route};
//! use wayfinder_std::RouterBuilder;
//!
//! let mut builder = RouterBuilder::<()>::new();
//! builder.insert(Route::new(r"[<controller>[/<action>[/<id \d+>]]]").unwrap().to("home::index")).unwrap();
//! let router = builder.build();
//!
//! let found = router.resolve("/blog/show/42", &Method::GET).unwrap();
//! assert_eq!(found.controller(), Some("blog"));
//! assert_eq!(found.action(), Some("show"));
//! assert_eq!(found.param("id"), Some("42"));
//! ```

use crate::{collection::Collection, registry::HookRegistry, routing::Routing};
use std::fmt;
use wayfinder_core::{
    ACTION, BuildError, CONTROLLER, Hook, MODULE, Method, Params, Request, Route, RoutingEvent,
};

/// Trim surrounding whitespace and slashes from a request path.
pub fn normalize_path(path: &str) -> &str {
    path.trim().trim_matches('/')
}

/// An immutable, ordered route table with observers.
pub struct Router<H = ()> {
    routes: Collection<H>,
    hooks: HookRegistry<H>,
}

impl<H: 'static> Router<H> {
    /// Start building a router.
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// The route table.
    pub fn routes(&self) -> &Collection<H> {
        &self.routes
    }

    /// The registered hooks.
    pub fn hooks(&self) -> &HookRegistry<H> {
        &self.hooks
    }

    /// Render the path of a named route.
    pub fn url(&self, name: &str, params: &Params) -> Result<String, BuildError> {
        self.routes.url(name, params)
    }

    /// Resolve `path` for `method` to the first matching route.
    ///
    /// Returns `None` when nothing matches; that is an ordinary outcome,
    /// not an error.
    pub fn resolve(&self, path: &str, method: &Method) -> Option<RouteMatch<'_, H>> {
        let uri = normalize_path(path);
        self.hooks
            .dispatch(&RoutingEvent::BeforeCheckRoutes { uri });

        let selected = self
            .routes
            .iter()
            .enumerate()
            .find_map(|(index, route)| {
                self.hooks.dispatch(&RoutingEvent::CheckRoute { route });
                check_route(route, uri, method).map(|params| (index, route, params))
            });

        self.hooks.dispatch(&RoutingEvent::AfterCheckRoutes {
            matched: selected.as_ref().map(|(_, route, _)| *route),
        });

        let Some((index, route, params)) = selected else {
            #[cfg(feature = "tracing")]
            tracing::debug!(uri, %method, "no route matched");
            return None;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(uri, %method, index, template = route.template().as_str(), "route matched");

        Some(RouteMatch::new(index, route, params))
    }

    /// Resolve an inbound request.
    pub fn handle<R: Request + ?Sized>(&self, request: &R) -> Option<RouteMatch<'_, H>> {
        self.resolve(request.path(), request.method())
    }

    /// Open a request-scoped routing context.
    pub fn routing<R: Request>(&self, request: R) -> Routing<'_, H, R> {
        Routing::new(self, request)
    }
}

impl<H: 'static> From<Collection<H>> for Router<H> {
    fn from(routes: Collection<H>) -> Self {
        Self {
            routes,
            hooks: HookRegistry::new(),
        }
    }
}

impl<H: 'static> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes.len())
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// Run steps 1-5 for a single route. `None` means "try the next route".
fn check_route<H>(route: &Route<H>, uri: &str, method: &Method) -> Option<Params> {
    if !route.accepts(method) {
        #[cfg(feature = "tracing")]
        tracing::trace!(template = route.template().as_str(), %method, "method not allowed");
        return None;
    }

    let mut params = route.template().captures(uri)?;

    for (key, value) in route.defaults().iter() {
        params.insert_if_absent(key, value);
    }

    if !route.has_handler() && (is_blank(&params, CONTROLLER) || is_blank(&params, ACTION)) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            template = route.template().as_str(),
            "pattern matched without controller/action or handler"
        );
        return None;
    }

    for (key, callback) in route.callbacks() {
        if let Some(value) = params.get(key).map(str::to_owned) {
            params.insert(key, callback(value));
        }
    }

    Some(params)
}

fn is_blank(params: &Params, key: &str) -> bool {
    params.get(key).is_none_or(str::is_empty)
}

/// The outcome of a successful resolution.
///
/// For routes without a direct handler, `controller`, `action` and a
/// non-empty `module` are moved out of the parameter set. For handler routes
/// the parameter set is kept whole.
pub struct RouteMatch<'r, H> {
    index: usize,
    route: &'r Route<H>,
    module: Option<String>,
    controller: Option<String>,
    action: Option<String>,
    params: Params,
}

impl<'r, H> RouteMatch<'r, H> {
    fn new(index: usize, route: &'r Route<H>, mut params: Params) -> Self {
        let (module, controller, action) = if route.has_handler() {
            (None, None, None)
        } else {
            let controller = params.remove(CONTROLLER);
            let action = params.remove(ACTION);
            let module = match params.get(MODULE) {
                Some(value) if !value.is_empty() => params.remove(MODULE),
                _ => None,
            };
            (module, controller, action)
        };

        Self {
            index,
            route,
            module,
            controller,
            action,
            params,
        }
    }

    /// The selected route.
    pub fn route(&self) -> &'r Route<H> {
        self.route
    }

    /// Registration index of the selected route.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The direct handler of the selected route, if any.
    pub fn handler(&self) -> Option<&'r H> {
        self.route.handler()
    }

    /// The module name, if one was matched or defaulted.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// The controller name. Always set unless the route has a handler.
    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    /// The action name. Always set unless the route has a handler.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// A single parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// All remaining parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Take ownership of the remaining parameters.
    pub fn into_params(self) -> Params {
        self.params
    }
}

impl<H> fmt::Debug for RouteMatch<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("index", &self.index)
            .field("route", &self.route.template().as_str())
            .field("module", &self.module)
            .field("controller", &self.controller)
            .field("action", &self.action)
            .field("params", &self.params)
            .finish()
    }
}

/// Builder for [`Router`].
pub struct RouterBuilder<H> {
    routes: Collection<H>,
    hooks: HookRegistry<H>,
}

impl<H: 'static> RouterBuilder<H> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            routes: Collection::new(),
            hooks: HookRegistry::new(),
        }
    }

    /// Allow several routes to share a name.
    pub fn allow_duplicate_names(mut self) -> Self {
        self.routes = self.routes.allow_duplicate_names();
        self
    }

    /// Register a hook.
    pub fn hook<K: Hook<H>>(mut self, hook: K) -> Self {
        self.hooks.register(hook);
        self
    }

    /// Append a route.
    ///
    /// Returns an error if the route's callbacks or name are invalid.
    pub fn insert(&mut self, route: Route<H>) -> Result<(), BuildError> {
        self.routes.add(route).map(|_| ())
    }

    /// Compile and append a route with a `module::controller::action` target.
    pub fn route(&mut self, template: &str, target: &str) -> Result<(), BuildError> {
        self.routes.route(template, target).map(|_| ())
    }

    /// Build the router, consuming the builder.
    pub fn build(self) -> Router<H> {
        Router {
            routes: self.routes,
            hooks: self.hooks,
        }
    }
}

impl<H: 'static> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
