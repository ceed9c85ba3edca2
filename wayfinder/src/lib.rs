//! # wayfinder - First-Match URL Router
//!
//! `wayfinder` maps request paths to a `(module, controller, action, params)`
//! tuple, or to a handler bound directly on the route. Routes are written in a
//! small template language and tried strictly in registration order; the first
//! route whose method filter and pattern both accept the request wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder::prelude::*;
//!
//! let mut builder = Router::<()>::builder();
//! builder
//!     .insert(Route::new("post/<id \\d+>").unwrap().to("blog::post::show").named("post"))
//!     .unwrap();
//! builder.route("[<controller>[/<action>]]", "home::index").unwrap();
//! let router = builder.build();
//!
//! let found = router.resolve("/post/42", &Method::GET).unwrap();
//! assert_eq!(found.module(), Some("blog"));
//! assert_eq!(found.controller(), Some("post"));
//! assert_eq!(found.param("id"), Some("42"));
//!
//! let params: Params = [("id", "7")].into_iter().collect();
//! assert_eq!(router.url("post", &params).unwrap(), "post/7");
//! ```
//!
//! ## Template syntax
//!
//! | Form              | Meaning                                          |
//! |-------------------|--------------------------------------------------|
//! | `literal`         | matched verbatim                                 |
//! | `<name>`          | captures one path segment (`[^/]+`)              |
//! | `<name pattern>`  | captures text matching `pattern`                 |
//! | `[ ... ]`         | optional group, may nest                         |
//!
//! ## Features
//!
//! - `tracing` (default): debug events for every resolution
//! - `tower`: [`tower::RouteLayer`], which resolves `http::Request`s and stores
//!   the outcome in request extensions

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use wayfinder_core::{
    // Errors
    BoxError,
    BuildError,
    TemplateError,
    // Hooks
    Hook,
    Interest,
    Only,
    RoutingEvent,
    // Routes
    ACTION,
    CONTROLLER,
    Callback,
    MODULE,
    Method,
    Params,
    Request,
    Route,
    // Templates
    DEFAULT_SEGMENT_PATTERN,
    Segment,
    Template,
};

pub use wayfinder_std::{
    Collection, HookRegistry, RouteMatch, Router, RouterBuilder, Routing, normalize_path,
};

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use wayfinder_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use wayfinder_std::testing::*;
}

#[cfg(feature = "tower")]
pub mod tower;

/// Prelude module - common imports for wayfinder.
///
/// # Usage
///
/// ```rust
/// use wayfinder::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BuildError, Hook, Method, Params, Request, Route, RouteMatch, Router, RouterBuilder,
        Routing, RoutingEvent,
    };
}
