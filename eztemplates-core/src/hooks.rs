//! # Property-scoped hooks
//!
//! The extension point of the router. Every method defaults to a no-op, so an
//! implementation only overrides the events it cares about. Hooks are only
//! called for items that currently carry a property of type `P`.
//!
//! # Example
//!
//! ```rust,ignore
//! struct PushToChildren;
//!
//! impl<I: Item> PropertyHooks<I, TemplateProperty> for PushToChildren {
//!     fn on_updated(&self, template: &I, property: &TemplateProperty) -> Result<(), BoxError> {
//!         propagate(template, property)
//!     }
//! }
//! ```

use crate::{error::BoxError, item::JobProperty};
use std::sync::Arc;

/// Callbacks for lifecycle events on items carrying a property of type `P`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PropertyHooks<{I}, {P}>`",
    label = "missing `PropertyHooks` implementation",
    note = "Implement only the callbacks you need; the rest default to no-ops."
)]
pub trait PropertyHooks<I: ?Sized, P: JobProperty>: Send + Sync {
    /// The item was created.
    fn on_created(&self, item: &I, property: &P) -> Result<(), BoxError> {
        let _ = (item, property);
        Ok(())
    }

    /// `item` was copied from `source`. `property` belongs to the new item.
    fn on_copied(&self, source: &I, item: &I, property: &P) -> Result<(), BoxError> {
        let _ = (source, item, property);
        Ok(())
    }

    /// The item was deleted.
    fn on_deleted(&self, item: &I, property: &P) -> Result<(), BoxError> {
        let _ = (item, property);
        Ok(())
    }

    /// The item was renamed.
    fn on_renamed(
        &self,
        item: &I,
        old_name: &str,
        new_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        let _ = (item, old_name, new_name, property);
        Ok(())
    }

    /// The item was moved to a new full name.
    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        let _ = (item, old_full_name, new_full_name, property);
        Ok(())
    }

    /// The item's configuration was saved.
    fn on_updated(&self, item: &I, property: &P) -> Result<(), BoxError> {
        let _ = (item, property);
        Ok(())
    }
}

macro_rules! forward_hooks {
    ($($ptr:ty),*) => {$(
        impl<I: ?Sized, P: JobProperty, H: PropertyHooks<I, P> + ?Sized> PropertyHooks<I, P> for $ptr {
            fn on_created(&self, item: &I, property: &P) -> Result<(), BoxError> {
                (**self).on_created(item, property)
            }

            fn on_copied(&self, source: &I, item: &I, property: &P) -> Result<(), BoxError> {
                (**self).on_copied(source, item, property)
            }

            fn on_deleted(&self, item: &I, property: &P) -> Result<(), BoxError> {
                (**self).on_deleted(item, property)
            }

            fn on_renamed(
                &self,
                item: &I,
                old_name: &str,
                new_name: &str,
                property: &P,
            ) -> Result<(), BoxError> {
                (**self).on_renamed(item, old_name, new_name, property)
            }

            fn on_location_changed(
                &self,
                item: &I,
                old_full_name: &str,
                new_full_name: &str,
                property: &P,
            ) -> Result<(), BoxError> {
                (**self).on_location_changed(item, old_full_name, new_full_name, property)
            }

            fn on_updated(&self, item: &I, property: &P) -> Result<(), BoxError> {
                (**self).on_updated(item, property)
            }
        }
    )*};
}

forward_hooks!(Box<H>, Arc<H>);

/// Hooks that do nothing for every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl<I: ?Sized, P: JobProperty> PropertyHooks<I, P> for NoopHooks {}
