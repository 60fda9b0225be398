//! Fan-out of host lifecycle events to every registered listener.

use eztemplates_core::{DispatchError, EventKinds, ItemListener, LifecycleEvent};
use std::{fmt, sync::Arc};

/// A registry of item listeners, notified in registration order.
///
/// Dispatch stops at the first failing listener and returns its error.
pub struct ListenerRegistry<I: ?Sized> {
    listeners: Vec<Arc<dyn ItemListener<I>>>,
}

impl<I: ?Sized> ListenerRegistry<I> {
    /// Create a builder.
    pub fn builder() -> ListenerRegistryBuilder<I> {
        ListenerRegistryBuilder::new()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Fire `event` at every listener.
    ///
    /// Listeners that do not handle the event's kind are skipped.
    pub fn fire(&self, event: &LifecycleEvent<'_, I>) -> Result<(), DispatchError> {
        let kind = event.kind();
        for listener in &self.listeners {
            if listener.handled_events().contains(kind) {
                listener.on_event(event)?;
            }
        }
        Ok(())
    }

    /// The union of all listeners' handled events.
    pub fn handled_events(&self) -> EventKinds {
        self.listeners
            .iter()
            .fold(EventKinds::empty(), |acc, l| acc | l.handled_events())
    }
}

impl<I: ?Sized> ItemListener<I> for ListenerRegistry<I> {
    fn on_created(&self, item: &I) -> Result<(), DispatchError> {
        self.fire(&LifecycleEvent::Created { item })
    }

    fn on_copied(&self, source: &I, item: &I) -> Result<(), DispatchError> {
        self.fire(&LifecycleEvent::Copied { source, item })
    }

    fn on_deleted(&self, item: &I) -> Result<(), DispatchError> {
        self.fire(&LifecycleEvent::Deleted { item })
    }

    fn on_renamed(&self, item: &I, old_name: &str, new_name: &str) -> Result<(), DispatchError> {
        self.fire(&LifecycleEvent::Renamed {
            item,
            old_name,
            new_name,
        })
    }

    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
    ) -> Result<(), DispatchError> {
        self.fire(&LifecycleEvent::LocationChanged {
            item,
            old_full_name,
            new_full_name,
        })
    }

    fn on_updated(&self, item: &I) -> Result<(), DispatchError> {
        self.fire(&LifecycleEvent::Updated { item })
    }

    fn handled_events(&self) -> EventKinds {
        ListenerRegistry::handled_events(self)
    }

    fn on_event(&self, event: &LifecycleEvent<'_, I>) -> Result<(), DispatchError> {
        self.fire(event)
    }
}

impl<I: ?Sized> fmt::Debug for ListenerRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Builder for constructing a [`ListenerRegistry`].
pub struct ListenerRegistryBuilder<I: ?Sized> {
    listeners: Vec<Arc<dyn ItemListener<I>>>,
}

impl<I: ?Sized> Default for ListenerRegistryBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> ListenerRegistryBuilder<I> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn register<L: ItemListener<I> + 'static>(mut self, listener: L) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    /// Register a listener that is shared elsewhere.
    pub fn register_shared(mut self, listener: Arc<dyn ItemListener<I>>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Build the registry.
    pub fn build(self) -> ListenerRegistry<I> {
        ListenerRegistry {
            listeners: self.listeners,
        }
    }
}
