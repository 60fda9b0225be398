//! Item lifecycle events fired by the host.

use bitflags::bitflags;
use std::fmt;

/// A single lifecycle notification, borrowing the affected item(s).
#[derive(Debug)]
pub enum LifecycleEvent<'a, I: ?Sized> {
    /// An item was created.
    Created {
        /// The new item.
        item: &'a I,
    },
    /// An item was copied from `source`.
    Copied {
        /// The item that was copied.
        source: &'a I,
        /// The newly created copy.
        item: &'a I,
    },
    /// An item was deleted.
    Deleted {
        /// The deleted item.
        item: &'a I,
    },
    /// An item was renamed within its parent.
    Renamed {
        /// The renamed item.
        item: &'a I,
        /// The short name before the rename.
        old_name: &'a str,
        /// The short name after the rename.
        new_name: &'a str,
    },
    /// An item moved to a new full name (rename or relocation).
    LocationChanged {
        /// The moved item.
        item: &'a I,
        /// The full name before the move.
        old_full_name: &'a str,
        /// The full name after the move.
        new_full_name: &'a str,
    },
    /// An item's configuration was saved.
    Updated {
        /// The updated item.
        item: &'a I,
    },
}

impl<I: ?Sized> Clone for LifecycleEvent<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized> Copy for LifecycleEvent<'_, I> {}

impl<'a, I: ?Sized> LifecycleEvent<'a, I> {
    /// The kind of this event.
    pub fn kind(&self) -> EventKinds {
        match self {
            LifecycleEvent::Created { .. } => EventKinds::CREATED,
            LifecycleEvent::Copied { .. } => EventKinds::COPIED,
            LifecycleEvent::Deleted { .. } => EventKinds::DELETED,
            LifecycleEvent::Renamed { .. } => EventKinds::RENAMED,
            LifecycleEvent::LocationChanged { .. } => EventKinds::LOCATION_CHANGED,
            LifecycleEvent::Updated { .. } => EventKinds::UPDATED,
        }
    }

    /// The item the event is about. For copies this is the new item.
    pub fn item(&self) -> &'a I {
        match *self {
            LifecycleEvent::Created { item }
            | LifecycleEvent::Copied { item, .. }
            | LifecycleEvent::Deleted { item }
            | LifecycleEvent::Renamed { item, .. }
            | LifecycleEvent::LocationChanged { item, .. }
            | LifecycleEvent::Updated { item } => item,
        }
    }
}

bitflags! {
    /// A set of lifecycle event kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// Item created.
        const CREATED = 1 << 0;
        /// Item copied.
        const COPIED = 1 << 1;
        /// Item deleted.
        const DELETED = 1 << 2;
        /// Item renamed.
        const RENAMED = 1 << 3;
        /// Item relocated.
        const LOCATION_CHANGED = 1 << 4;
        /// Item configuration saved.
        const UPDATED = 1 << 5;
    }
}

impl EventKinds {
    /// Events dispatched without any suppression condition.
    pub const UNCONDITIONAL: Self = Self::CREATED
        .union(Self::COPIED)
        .union(Self::DELETED)
        .union(Self::RENAMED)
        .union(Self::LOCATION_CHANGED);

    /// Short lowercase label for a single kind, used in logs.
    pub fn label(&self) -> &'static str {
        const LABELS: [(EventKinds, &str); 6] = [
            (EventKinds::CREATED, "created"),
            (EventKinds::COPIED, "copied"),
            (EventKinds::DELETED, "deleted"),
            (EventKinds::RENAMED, "renamed"),
            (EventKinds::LOCATION_CHANGED, "location_changed"),
            (EventKinds::UPDATED, "updated"),
        ];
        LABELS
            .iter()
            .find(|(kind, _)| kind == self)
            .map_or("mixed", |(_, label)| *label)
    }
}

impl fmt::Display for EventKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
