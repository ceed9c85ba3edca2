//! # wayfinder-core
//!
//! Core types for the wayfinder URL router.
//!
//! This crate has minimal dependencies and holds everything a route author
//! or hook implementor touches; the scanning router itself lives in
//! `wayfinder-std`.
//!
//! # Building Blocks
//!
//! ## [`Template`]
//!
//! The route mini-syntax (`<name>`, `<name pattern>`, nested `[...]`
//! optional groups), compiled once into an anchored regular expression.
//! Malformed templates are rejected here, never at match time.
//!
//! ## [`Route`]
//!
//! A template plus dispatch rules: accepted methods, defaults, value
//! callbacks and an optional direct handler.
//!
//! ## [`Hook`]
//!
//! Best-effort observers fired before, during and after a routing scan.
//!
//! ## [`Request`]
//!
//! The path and method of an inbound request, implemented for
//! `http::Request`.
//!
//! # Error Types
//!
//! - [`TemplateError`] - Template compilation and expansion errors
//! - [`BuildError`] - Route registration errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
mod params;
mod request;
mod route;
mod template;

// Re-exports
pub use error::{BoxError, BuildError, TemplateError};
pub use hook::{Hook, Interest, Only, RoutingEvent};
pub use params::Params;
pub use request::Request;
pub use route::{ACTION, CONTROLLER, Callback, MODULE, Route};
pub use template::{DEFAULT_SEGMENT_PATTERN, Segment, Template};

pub use http::Method;
