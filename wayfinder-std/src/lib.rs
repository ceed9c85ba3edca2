//! # wayfinder-std
//!
//! Standard implementations for the wayfinder URL router.
//!
//! This crate provides:
//! - **Route table**: [`Collection`], routes in registration order
//! - **Resolution**: [`Router`], [`RouterBuilder`], [`RouteMatch`]
//! - **Request scope**: [`Routing`], `handle()` plus accessors
//! - **Hooks**: [`HookRegistry`], [`hooks::LoggingHook`]
//! - **Testing**: [`testing::RecordingHook`], [`testing::TestRequest`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use wayfinder_core;

mod collection;
mod registry;
mod router;
mod routing;

pub mod hooks;
pub mod testing;

pub use collection::Collection;
pub use registry::HookRegistry;
pub use router::{RouteMatch, Router, RouterBuilder, normalize_path};
pub use routing::Routing;
