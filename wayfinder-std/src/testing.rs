//! Testing utilities for wayfinder.
//!
//! - [`RecordingHook`]: A hook that records every routing event it sees
//! - [`TestRequest`]: A minimal owned [`Request`]

use std::sync::{Arc, Mutex, PoisonError};
use wayfinder_core::{BoxError, Hook, Method, Request, RoutingEvent};

// ============================================================================
// Recording Hook
// ============================================================================

/// An owned summary of a [`RoutingEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// The event name, e.g. `router.checkRoute`.
    pub name: &'static str,
    /// The path for `before`, the route template for `check`, the matched
    /// template (if any) for `after`.
    pub detail: Option<String>,
}

impl RecordedEvent {
    fn from_event<H>(event: &RoutingEvent<'_, H>) -> Self {
        let detail = match event {
            RoutingEvent::BeforeCheckRoutes { uri } => Some((*uri).to_owned()),
            RoutingEvent::CheckRoute { route } => Some(route.template().as_str().to_owned()),
            RoutingEvent::AfterCheckRoutes { matched } => {
                matched.map(|route| route.template().as_str().to_owned())
            }
        };
        Self {
            name: event.name(),
            detail,
        }
    }
}

/// A hook that records all events it receives.
///
/// Clones share the same record, so keep one clone and hand the other to
/// the router.
///
/// # Example
///
/// ```rust
/// use wayfinder_core::Method;
/// use wayfinder_std::{RouterBuilder, testing::RecordingHook};
///
/// let recorder = RecordingHook::new();
/// let mut builder = RouterBuilder::<()>::new().hook(recorder.clone());
/// builder.route("about", "pages::about").unwrap();
/// let router = builder.build();
///
/// router.resolve("/about", &Method::GET);
/// assert_eq!(
///     recorder.names(),
///     ["router.before.checkRoutes", "router.checkRoute", "router.after.checkRoutes"]
/// );
/// ```
#[derive(Clone, Default)]
pub struct RecordingHook {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
    fail: bool,
}

impl RecordingHook {
    /// Create a new recording hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording hook that returns an error after recording.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    /// Get the recorded event names.
    pub fn names(&self) -> Vec<&'static str> {
        self.lock().iter().map(|e| e.name).collect()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecordedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H> Hook<H> for RecordingHook {
    fn on_event(&self, event: &RoutingEvent<'_, H>) -> Result<(), BoxError> {
        self.lock().push(RecordedEvent::from_event(event));
        if self.fail {
            return Err(format!("recording hook rejected {}", event.name()).into());
        }
        Ok(())
    }
}

// ============================================================================
// Test Request
// ============================================================================

/// An owned request with just a method and a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRequest {
    method: Method,
    path: String,
}

impl TestRequest {
    /// Create a request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// A `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A `POST` request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }
}

impl Request for TestRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> &Method {
        &self.method
    }
}
