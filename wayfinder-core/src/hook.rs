//! # Routing Hooks
//!
//! Observers invoked at fixed points while a router scans its routes.
//!
//! Hooks are strictly best-effort: they see the scan but cannot steer it.
//! An error returned from a hook is reported by the router and otherwise
//! ignored, so the routing outcome is identical with or without hooks.
//!
//! # Extension points
//!
//! | Event | Fired |
//! |-------|-------|
//! | `router.before.checkRoutes` | once, with the normalized path |
//! | `router.checkRoute` | before each route is tried |
//! | `router.after.checkRoutes` | once, with the selected route (if any) |

use crate::{error::BoxError, route::Route};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The set of events a hook wants to receive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Interest: u8 {
        /// [`RoutingEvent::BeforeCheckRoutes`].
        const BEFORE_CHECK_ROUTES = 1 << 0;
        /// [`RoutingEvent::CheckRoute`].
        const CHECK_ROUTE = 1 << 1;
        /// [`RoutingEvent::AfterCheckRoutes`].
        const AFTER_CHECK_ROUTES = 1 << 2;
    }
}

/// A notification emitted during route resolution.
pub enum RoutingEvent<'a, H> {
    /// Scanning is about to start.
    BeforeCheckRoutes {
        /// The normalized request path.
        uri: &'a str,
    },
    /// A route is about to be tried.
    CheckRoute {
        /// The candidate route.
        route: &'a Route<H>,
    },
    /// Scanning finished.
    AfterCheckRoutes {
        /// The selected route, if any.
        matched: Option<&'a Route<H>>,
    },
}

impl<H> RoutingEvent<'_, H> {
    /// The event name.
    pub fn name(&self) -> &'static str {
        match self {
            RoutingEvent::BeforeCheckRoutes { .. } => "router.before.checkRoutes",
            RoutingEvent::CheckRoute { .. } => "router.checkRoute",
            RoutingEvent::AfterCheckRoutes { .. } => "router.after.checkRoutes",
        }
    }

    /// The [`Interest`] flag selecting this event.
    pub fn kind(&self) -> Interest {
        match self {
            RoutingEvent::BeforeCheckRoutes { .. } => Interest::BEFORE_CHECK_ROUTES,
            RoutingEvent::CheckRoute { .. } => Interest::CHECK_ROUTE,
            RoutingEvent::AfterCheckRoutes { .. } => Interest::AFTER_CHECK_ROUTES,
        }
    }
}

// Manual impls: deriving would require `H: Clone`/`H: Debug`.
impl<H> Clone for RoutingEvent<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for RoutingEvent<'_, H> {}

impl<H> fmt::Debug for RoutingEvent<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingEvent::BeforeCheckRoutes { uri } => f
                .debug_struct("BeforeCheckRoutes")
                .field("uri", uri)
                .finish(),
            RoutingEvent::CheckRoute { route } => f
                .debug_struct("CheckRoute")
                .field("route", &route.template().as_str())
                .finish(),
            RoutingEvent::AfterCheckRoutes { matched } => f
                .debug_struct("AfterCheckRoutes")
                .field("matched", &matched.map(|r| r.template().as_str()))
                .finish(),
        }
    }
}

/// An observer of route resolution.
///
/// Closures taking `&RoutingEvent<H>` and returning `Result<(), BoxError>`
/// implement this trait.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook<{H}>`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `on_event` for routers with handler type `{H}`."
)]
pub trait Hook<H>: Send + Sync + 'static {
    /// Called for every event selected by [`Hook::interest`].
    fn on_event(&self, event: &RoutingEvent<'_, H>) -> Result<(), BoxError>;

    /// Events this hook wants. Defaults to all of them.
    fn interest(&self) -> Interest {
        Interest::all()
    }
}

impl<H, F> Hook<H> for F
where
    F: Fn(&RoutingEvent<'_, H>) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn on_event(&self, event: &RoutingEvent<'_, H>) -> Result<(), BoxError> {
        (self)(event)
    }
}

/// A hook restricted to a subset of events.
pub struct Only<K> {
    inner: K,
    interest: Interest,
}

impl<K> Only<K> {
    /// Deliver only the events in `interest` to `inner`.
    pub fn new(interest: Interest, inner: K) -> Self {
        Self { inner, interest }
    }
}

impl<H, K: Hook<H>> Hook<H> for Only<K> {
    fn on_event(&self, event: &RoutingEvent<'_, H>) -> Result<(), BoxError> {
        self.inner.on_event(event)
    }

    fn interest(&self) -> Interest {
        self.interest & self.inner.interest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_event_names() {
        let route: Route = Route::new("blog").unwrap();
        let before: RoutingEvent<'_, ()> = RoutingEvent::BeforeCheckRoutes { uri: "blog" };
        let check = RoutingEvent::CheckRoute { route: &route };
        let after = RoutingEvent::AfterCheckRoutes {
            matched: Some(&route),
        };

        assert_eq!(before.name(), "router.before.checkRoutes");
        assert_eq!(check.name(), "router.checkRoute");
        assert_eq!(after.name(), "router.after.checkRoutes");
        assert_eq!(check.kind(), Interest::CHECK_ROUTE);
    }

    #[test]
    fn test_closure_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let hook = move |_: &RoutingEvent<'_, ()>| -> Result<(), BoxError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        };

        Hook::<()>::on_event(&hook, &RoutingEvent::BeforeCheckRoutes { uri: "" }).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(Hook::<()>::interest(&hook), Interest::all());
    }

    #[test]
    fn test_only_narrows_interest() {
        let hook = Only::new(
            Interest::AFTER_CHECK_ROUTES,
            |_: &RoutingEvent<'_, ()>| -> Result<(), BoxError> { Ok(()) },
        );
        assert_eq!(Hook::<()>::interest(&hook), Interest::AFTER_CHECK_ROUTES);
    }
}
