//! Registry of routing hooks.

use wayfinder_core::{Hook, RoutingEvent};

/// Hooks notified during route resolution, in registration order.
///
/// An empty registry is the no-op default: dispatching to it does nothing.
pub struct HookRegistry<H> {
    hooks: Vec<Box<dyn Hook<H>>>,
}

impl<H: 'static> HookRegistry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook.
    pub fn register<K: Hook<H>>(&mut self, hook: K) {
        self.hooks.push(Box::new(hook));
    }

    /// Deliver `event` to every interested hook.
    ///
    /// Hook failures are logged and swallowed; they never reach the caller.
    pub fn dispatch(&self, event: &RoutingEvent<'_, H>) {
        let kind = event.kind();
        for hook in self.hooks.iter().filter(|h| h.interest().contains(kind)) {
            if let Err(err) = hook.on_event(event) {
                #[cfg(feature = "tracing")]
                tracing::warn!(event = event.name(), error = %err, "routing hook failed");
                #[cfg(not(feature = "tracing"))]
                let _ = err;
            }
        }
    }

    /// Get the number of hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<H: 'static> Default for HookRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
