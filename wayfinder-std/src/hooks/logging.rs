//! Logging Hook - Observability for route resolution.

use wayfinder_core::{BoxError, Hook, RoutingEvent};

/// A Hook that logs every routing event.
///
/// Events are emitted at `debug` level through `tracing` when the `tracing`
/// feature is enabled; otherwise the hook does nothing.
///
/// # Example
///
/// ```rust,ignore
/// use wayfinder_std::{RouterBuilder, hooks::LoggingHook};
///
/// let router = RouterBuilder::<()>::new()
///     .hook(LoggingHook::named("api"))
///     .build();
/// ```
pub struct LoggingHook {
    name: &'static str,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self { name: "router" }
    }

    /// Create a new `LoggingHook` with a custom name.
    ///
    /// The name identifies the router in log output.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Hook<H> for LoggingHook {
    fn on_event(&self, event: &RoutingEvent<'_, H>) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(router = %self.name, event = event.name(), detail = ?event, "routing event");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, event);
        }

        Ok(())
    }
}
