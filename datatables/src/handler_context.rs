//! Event handlers for table widgets.
//!
//! - `Handler`: closure type for handlers
//! - `HandlerContext`: what a handler learns about the event that fired it
//! - `HandlerRegistry`: stores handlers keyed by (element_id, event_type)

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A handler closure that receives a HandlerContext.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Event-specific data passed to handlers via HandlerContext.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventData {
    /// No event data.
    #[default]
    None,
    /// A pointer interaction landed outside an interaction scope.
    OutsideClick {
        /// The element that was hit instead, if any.
        target: Option<String>,
    },
}

/// Context passed to every handler invocation.
#[derive(Debug)]
pub struct HandlerContext<'a> {
    element_id: &'a str,
    event: &'a str,
    event_data: EventData,
}

impl<'a> HandlerContext<'a> {
    pub fn new(element_id: &'a str, event: &'a str, event_data: EventData) -> Self {
        Self {
            element_id,
            event,
            event_data,
        }
    }

    /// The element the event was dispatched to.
    pub fn element_id(&self) -> &str {
        self.element_id
    }

    /// The event name, e.g. `"on_activate"`.
    pub fn event_name(&self) -> &str {
        self.event
    }

    pub fn event(&self) -> &EventData {
        &self.event_data
    }
}

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. Cleared at the start
/// of each build so handlers from previous builds don't persist.
///
/// Standard event names:
/// - `"on_activate"` - click or enter on a checkbox, menu trigger or item
/// - `"on_outside_click"` - pointer interaction outside an open overlay
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Invoke the handler registered for an element event.
    ///
    /// Returns false when nothing is registered.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        self.dispatch_with(element_id, event, EventData::None)
    }

    /// Invoke a handler with event data.
    pub fn dispatch_with(&self, element_id: &str, event: &str, data: EventData) -> bool {
        // Clone out of the lock so the handler may touch the registry.
        let Some(handler) = self.get(element_id, event) else {
            log::trace!("No handler for {}:{}", element_id, event);
            return false;
        };
        log::trace!("Dispatching {}:{}", element_id, event);
        handler(&HandlerContext::new(element_id, event, data));
        true
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_dispatch_reaches_registered_handler() {
        let registry = HandlerRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        registry.register(
            "box",
            "on_activate",
            Arc::new(move |hx: &HandlerContext| {
                assert_eq!(hx.element_id(), "box");
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(registry.dispatch("box", "on_activate"));
        assert!(!registry.dispatch("box", "on_blur"));
        assert!(!registry.dispatch("other", "on_activate"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_drops_handlers() {
        let registry = HandlerRegistry::new();
        registry.register("a", "on_activate", Arc::new(|_| {}));
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_event_data_reaches_handler() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(RwLock::new(None));
        let sink = seen.clone();
        registry.register(
            "overlay",
            "on_outside_click",
            Arc::new(move |hx: &HandlerContext| {
                if let EventData::OutsideClick { target } = hx.event() {
                    *sink.write().unwrap() = target.clone();
                }
            }),
        );

        registry.dispatch_with(
            "overlay",
            "on_outside_click",
            EventData::OutsideClick {
                target: Some("body".into()),
            },
        );
        assert_eq!(seen.read().unwrap().as_deref(), Some("body"));
    }
}
