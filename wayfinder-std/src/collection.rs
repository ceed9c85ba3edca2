//! Ordered route storage.
//!
//! Registration order is part of the routing contract: the router tries
//! routes in exactly the order they were added, so specific routes must be
//! added before catch-alls.

use std::collections::HashMap;
use wayfinder_core::{BuildError, Params, Route};

/// Routes in registration order, with an index of named routes.
pub struct Collection<H = ()> {
    routes: Vec<Route<H>>,
    names: HashMap<String, usize>,
    allow_duplicate_names: bool,
}

impl<H> Collection<H> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
            allow_duplicate_names: false,
        }
    }

    /// Allow several routes to share a name (the last one added wins
    /// reverse lookups).
    pub fn allow_duplicate_names(mut self) -> Self {
        self.allow_duplicate_names = true;
        self
    }

    /// Register a route after validating its callbacks and name.
    pub fn add(&mut self, route: Route<H>) -> Result<&mut Self, BuildError> {
        route.validate()?;

        if let Some(name) = route.name() {
            if !self.allow_duplicate_names && self.names.contains_key(name) {
                return Err(BuildError::DuplicateName(name.to_owned()));
            }
            self.names.insert(name.to_owned(), self.routes.len());
        }

        self.routes.push(route);
        Ok(self)
    }

    /// Compile `template` and register it with a `module::controller::action`
    /// style target.
    pub fn route(&mut self, template: &str, target: &str) -> Result<&mut Self, BuildError> {
        self.add(Route::new(template)?.to(target))
    }

    /// Iterate over routes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route<H>> {
        self.routes.iter()
    }

    /// Get a route by registration index.
    pub fn at(&self, index: usize) -> Option<&Route<H>> {
        self.routes.get(index)
    }

    /// Get a route by name.
    pub fn get(&self, name: &str) -> Option<&Route<H>> {
        self.names.get(name).and_then(|&idx| self.routes.get(idx))
    }

    /// Render the path of a named route.
    pub fn url(&self, name: &str, params: &Params) -> Result<String, BuildError> {
        let route = self
            .get(name)
            .ok_or_else(|| BuildError::UnknownRoute(name.to_owned()))?;
        Ok(route.url(params)?)
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<H> Default for Collection<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, H> IntoIterator for &'a Collection<H> {
    type Item = &'a Route<H>;
    type IntoIter = std::slice::Iter<'a, Route<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_registration_order() {
        let mut routes: Collection = Collection::new();
        routes.route("about", "pages::about").unwrap();
        routes.route("[<controller>[/<action>]]", "home::index").unwrap();

        let templates: Vec<_> = routes.iter().map(|r| r.template().as_str()).collect();
        assert_eq!(templates, ["about", "[<controller>[/<action>]]"]);
    }

    #[test]
    fn test_duplicate_name_error() {
        let mut routes: Collection = Collection::new();
        routes
            .add(Route::new("a").unwrap().named("home"))
            .unwrap();

        let result = routes.add(Route::new("b").unwrap().named("home"));
        assert!(matches!(result, Err(BuildError::DuplicateName(_))));
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn test_allow_duplicate_names() {
        let mut routes: Collection = Collection::new().allow_duplicate_names();
        routes.add(Route::new("a").unwrap().named("home")).unwrap();
        routes.add(Route::new("b").unwrap().named("home")).unwrap();

        assert_eq!(routes.get("home").unwrap().template().as_str(), "b");
    }

    #[test]
    fn test_invalid_routes_are_rejected() {
        let mut routes: Collection = Collection::new();
        assert!(matches!(
            routes.route("[<controller>", "x::y"),
            Err(BuildError::Template(_))
        ));
        assert!(matches!(
            routes.add(Route::new("<id>").unwrap().callback("slug", |v| v)),
            Err(BuildError::UnknownCallbackParameter { .. })
        ));
        assert!(routes.is_empty());
    }

    #[test]
    fn test_url_for_named_route() {
        let mut routes: Collection = Collection::new();
        routes
            .add(Route::new(r"post/<id \d+>").unwrap().named("post"))
            .unwrap();

        let params: Params = [("id", "7")].into_iter().collect();
        assert_eq!(routes.url("post", &params).unwrap(), "post/7");
        assert!(matches!(
            routes.url("missing", &params),
            Err(BuildError::UnknownRoute(_))
        ));
    }
}
