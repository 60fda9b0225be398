//! Read-only view of the bulk-save suppression registry.
//!
//! While the bulk-save pathway processes a change for an (item, property
//! type) pair it records the pair in a registry. The generic Updated event
//! for that pair is then skipped so the change is not applied twice.

use crate::item::PropertyKind;
use std::sync::Arc;

/// Answers whether an (item, property type) pair is claimed by the bulk-save
/// pathway.
///
/// Implementations are shared between threads and synchronize internally.
pub trait SuppressionRegistry: Send + Sync {
    /// Whether `item_full_name` is currently handled for property `kind`.
    fn contains(&self, item_full_name: &str, kind: PropertyKind) -> bool;
}

impl<R: SuppressionRegistry + ?Sized> SuppressionRegistry for Arc<R> {
    fn contains(&self, item_full_name: &str, kind: PropertyKind) -> bool {
        (**self).contains(item_full_name, kind)
    }
}

impl<R: SuppressionRegistry + ?Sized> SuppressionRegistry for &R {
    fn contains(&self, item_full_name: &str, kind: PropertyKind) -> bool {
        (**self).contains(item_full_name, kind)
    }
}

/// A registry that never claims anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuppression;

impl SuppressionRegistry for NoSuppression {
    fn contains(&self, _item_full_name: &str, _kind: PropertyKind) -> bool {
        false
    }
}
