//! Route definitions.
//!
//! A [`Route`] pairs a compiled [`Template`] with the dispatch rules applied
//! after its pattern matches: accepted methods, defaults, value callbacks and
//! an optional direct handler. Routes are immutable once registered.

use crate::{
    error::{BuildError, TemplateError},
    params::Params,
    template::Template,
};
use http::Method;
use std::{fmt, sync::Arc};

/// Parameter name holding the controller.
pub const CONTROLLER: &str = "controller";
/// Parameter name holding the action.
pub const ACTION: &str = "action";
/// Parameter name holding the module.
pub const MODULE: &str = "module";

/// A transform applied to one matched parameter value before dispatch.
pub type Callback = Arc<dyn Fn(String) -> String + Send + Sync>;

/// A compiled routing rule.
///
/// `H` is the direct handler type. Routes without a handler dispatch through
/// the `controller`/`action` (and optional `module`) parameters instead.
///
/// # Example
///
/// ```rust
/// use wayfinder_core::{Method, Route};
///
/// let route: Route = Route::new(r"posts[/<id \d+>]")
///     .unwrap()
///     .method(Method::GET)
///     .to("blog::post::show");
///
/// assert_eq!(route.defaults().get("module"), Some("blog"));
/// assert!(route.accepts(&Method::GET));
/// assert!(!route.accepts(&Method::POST));
/// ```
pub struct Route<H = ()> {
    template: Template,
    methods: Vec<Method>,
    defaults: Params,
    callbacks: Vec<(String, Callback)>,
    handler: Option<H>,
    name: Option<String>,
}

impl<H> Route<H> {
    /// Compile `template` into a route that accepts any method.
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        Ok(Self::from_template(Template::parse(template)?))
    }

    /// Wrap an already compiled template.
    pub fn from_template(template: Template) -> Self {
        Self {
            template,
            methods: Vec::new(),
            defaults: Params::new(),
            callbacks: Vec::new(),
            handler: None,
            name: None,
        }
    }

    /// Restrict the route to `method`, in addition to any already accepted.
    pub fn method(mut self, method: Method) -> Self {
        if !self.methods.contains(&method) {
            self.methods.push(method);
        }
        self
    }

    /// Restrict the route to the given methods.
    pub fn methods(self, methods: impl IntoIterator<Item = Method>) -> Self {
        methods.into_iter().fold(self, |route, m| route.method(m))
    }

    /// Set a fallback value used when the match does not capture `name`.
    pub fn default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name, value);
        self
    }

    /// Set dispatch defaults from a `module::controller::action`,
    /// `controller::action` or bare `controller` target.
    pub fn to(self, target: &str) -> Self {
        // Anything past the second `::` belongs to the action.
        let parts: Vec<&str> = target.splitn(3, "::").map(str::trim).collect();
        let keys: &[&str] = match parts.len() {
            1 => &[CONTROLLER],
            2 => &[CONTROLLER, ACTION],
            _ => &[MODULE, CONTROLLER, ACTION],
        };

        keys.iter()
            .zip(parts)
            .filter(|(_, value)| !value.is_empty())
            .fold(self, |route, (key, value)| route.default(*key, value))
    }

    /// Transform the value of `name` after defaults are merged.
    ///
    /// Callbacks run in registration order. Registering a second callback for
    /// the same name appends it; both run.
    pub fn callback<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.callbacks.push((name.into(), Arc::new(callback)));
        self
    }

    /// Dispatch directly to `handler`, bypassing controller/action resolution.
    pub fn with_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Name the route for reverse routing.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The compiled template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Accepted methods; empty means any.
    pub fn allowed_methods(&self) -> &[Method] {
        &self.methods
    }

    /// Check whether `method` may use this route. Comparison is exact.
    pub fn accepts(&self, method: &Method) -> bool {
        self.methods.is_empty() || self.methods.contains(method)
    }

    /// Declared defaults.
    pub fn defaults(&self) -> &Params {
        &self.defaults
    }

    /// Registered callbacks in registration order.
    pub fn callbacks(&self) -> impl Iterator<Item = (&str, &Callback)> {
        self.callbacks.iter().map(|(name, cb)| (name.as_str(), cb))
    }

    /// The direct handler, if any.
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Check whether the route has a direct handler.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// The route name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Reject callbacks for names neither the template nor the defaults
    /// can ever produce.
    pub fn validate(&self) -> Result<(), BuildError> {
        for (name, _) in &self.callbacks {
            if !self.template.declares(name) && !self.defaults.contains(name) {
                return Err(BuildError::UnknownCallbackParameter {
                    name: name.clone(),
                    template: self.template.as_str().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Render a path for this route. Defaults fill parameters the caller
    /// leaves out.
    pub fn url(&self, params: &Params) -> Result<String, TemplateError> {
        let mut merged = params.clone();
        for (key, value) in self.defaults.iter() {
            merged.insert_if_absent(key, value);
        }
        self.template.expand(&merged)
    }
}

impl<H> fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template.as_str())
            .field("methods", &self.methods)
            .field("defaults", &self.defaults)
            .field(
                "callbacks",
                &self.callbacks.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("has_handler", &self.handler.is_some())
            .field("name", &self.name)
            .finish()
    }
}
