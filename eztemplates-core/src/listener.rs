//! # Inbound Item Listener
//!
//! The host-facing entry point. The host calls one method per lifecycle
//! event, synchronously, on whichever thread raised the event. Failures are
//! returned, never swallowed; reporting them is the host's concern.

use crate::{
    error::DispatchError,
    event::{EventKinds, LifecycleEvent},
};
use std::sync::Arc;

/// Receives the host's item lifecycle notifications.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `ItemListener` for `{I}`",
    label = "missing `ItemListener` implementation",
    note = "Item listeners must handle all six lifecycle events."
)]
pub trait ItemListener<I: ?Sized>: Send + Sync {
    /// An item was created.
    fn on_created(&self, item: &I) -> Result<(), DispatchError>;

    /// `item` was copied from `source`.
    fn on_copied(&self, source: &I, item: &I) -> Result<(), DispatchError>;

    /// An item was deleted.
    fn on_deleted(&self, item: &I) -> Result<(), DispatchError>;

    /// An item was renamed.
    fn on_renamed(&self, item: &I, old_name: &str, new_name: &str) -> Result<(), DispatchError>;

    /// An item moved to a new full name.
    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
    ) -> Result<(), DispatchError>;

    /// An item's configuration was saved.
    fn on_updated(&self, item: &I) -> Result<(), DispatchError>;

    /// Event kinds this listener may act on. Defaults to all of them.
    fn handled_events(&self) -> EventKinds {
        EventKinds::all()
    }

    /// Routes an event value to the matching method.
    fn on_event(&self, event: &LifecycleEvent<'_, I>) -> Result<(), DispatchError> {
        match *event {
            LifecycleEvent::Created { item } => self.on_created(item),
            LifecycleEvent::Copied { source, item } => self.on_copied(source, item),
            LifecycleEvent::Deleted { item } => self.on_deleted(item),
            LifecycleEvent::Renamed {
                item,
                old_name,
                new_name,
            } => self.on_renamed(item, old_name, new_name),
            LifecycleEvent::LocationChanged {
                item,
                old_full_name,
                new_full_name,
            } => self.on_location_changed(item, old_full_name, new_full_name),
            LifecycleEvent::Updated { item } => self.on_updated(item),
        }
    }
}

impl<I: ?Sized, L: ItemListener<I> + ?Sized> ItemListener<I> for Arc<L> {
    fn on_created(&self, item: &I) -> Result<(), DispatchError> {
        (**self).on_created(item)
    }

    fn on_copied(&self, source: &I, item: &I) -> Result<(), DispatchError> {
        (**self).on_copied(source, item)
    }

    fn on_deleted(&self, item: &I) -> Result<(), DispatchError> {
        (**self).on_deleted(item)
    }

    fn on_renamed(&self, item: &I, old_name: &str, new_name: &str) -> Result<(), DispatchError> {
        (**self).on_renamed(item, old_name, new_name)
    }

    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
    ) -> Result<(), DispatchError> {
        (**self).on_location_changed(item, old_full_name, new_full_name)
    }

    fn on_updated(&self, item: &I) -> Result<(), DispatchError> {
        (**self).on_updated(item)
    }

    fn handled_events(&self) -> EventKinds {
        (**self).handled_events()
    }
}
