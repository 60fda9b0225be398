//! Bulk-save change registry.
//!
//! The save-listener pathway claims an (item, property type) pair for as long
//! as it is applying a change, so that the generic Updated event for the same
//! save is skipped by every [`PropertyRouter`].
//!
//! ```rust,ignore
//! let registry = Arc::new(ChangeRegistry::new());
//! {
//!     let _guard = registry.track(job.full_name(), PropertyKind::of::<TemplateProperty>());
//!     job.save()?; // Updated fired here is ignored by routers sharing `registry`
//! }
//! ```
//!
//! [`PropertyRouter`]: crate::router::PropertyRouter

use eztemplates_core::{PropertyKind, SuppressionRegistry};
use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

type Key = (String, PropertyKind);
type Claims = HashMap<PropertyKind, HashMap<String, usize>>;

/// Process-wide set of (item, property type) pairs claimed by bulk saves.
///
/// Claims are counted, so the same pair may be tracked re-entrantly; it is
/// released when the last [`ChangeGuard`] is dropped.
#[derive(Default)]
pub struct ChangeRegistry {
    claims: Mutex<Claims>,
}

impl ChangeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `item_full_name` for property `kind` until the guard is dropped.
    #[must_use = "the claim is released as soon as the guard is dropped"]
    pub fn track(&self, item_full_name: impl Into<String>, kind: PropertyKind) -> ChangeGuard<'_> {
        let item_full_name = item_full_name.into();
        *self
            .lock()
            .entry(kind)
            .or_default()
            .entry(item_full_name.clone())
            .or_insert(0) += 1;
        ChangeGuard {
            registry: self,
            key: Some((item_full_name, kind)),
        }
    }

    /// Number of distinct pairs currently claimed.
    pub fn len(&self) -> usize {
        self.lock().values().map(HashMap::len).sum()
    }

    /// Whether nothing is currently claimed.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn release(&self, (item_full_name, kind): &Key) {
        let mut claims = self.lock();
        let Some(items) = claims.get_mut(kind) else {
            return;
        };
        if let Some(count) = items.get_mut(item_full_name.as_str()) {
            *count -= 1;
            if *count == 0 {
                items.remove(item_full_name.as_str());
            }
        }
        if items.is_empty() {
            claims.remove(kind);
        }
    }

    // A panic while holding the lock leaves the map consistent, so poisoning
    // is ignored.
    fn lock(&self) -> MutexGuard<'_, Claims> {
        self.claims.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SuppressionRegistry for ChangeRegistry {
    fn contains(&self, item_full_name: &str, kind: PropertyKind) -> bool {
        self.lock()
            .get(&kind)
            .is_some_and(|items| items.contains_key(item_full_name))
    }
}

impl fmt::Debug for ChangeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeRegistry")
            .field("claims", &*self.lock())
            .finish()
    }
}

/// Releases one claim on drop.
pub struct ChangeGuard<'a> {
    registry: &'a ChangeRegistry,
    key: Option<Key>,
}

impl ChangeGuard<'_> {
    /// Release the claim now instead of at end of scope.
    pub fn release(mut self) {
        self.release_claim();
    }

    fn release_claim(&mut self) {
        if let Some(key) = self.key.take() {
            self.registry.release(&key);
        }
    }
}

impl Drop for ChangeGuard<'_> {
    fn drop(&mut self) {
        self.release_claim();
    }
}

impl fmt::Debug for ChangeGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeGuard").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eztemplates_core::JobProperty;

    struct TemplateProperty;
    impl JobProperty for TemplateProperty {}

    struct ImplementationProperty;
    impl JobProperty for ImplementationProperty {}

    #[test]
    fn test_track_and_release() {
        let registry = ChangeRegistry::new();
        let kind = PropertyKind::of::<TemplateProperty>();
        assert!(!registry.contains("folder/job", kind));

        let guard = registry.track("folder/job", kind);
        assert!(registry.contains("folder/job", kind));
        assert!(!registry.contains("folder/other", kind));
        assert!(!registry.contains("folder/job", PropertyKind::of::<ImplementationProperty>()));

        drop(guard);
        assert!(!registry.contains("folder/job", kind));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_nested_claims() {
        let registry = ChangeRegistry::new();
        let kind = PropertyKind::of::<TemplateProperty>();

        let outer = registry.track("job", kind);
        let inner = registry.track("job", kind);
        assert_eq!(registry.len(), 1);

        inner.release();
        assert!(registry.contains("job", kind));

        drop(outer);
        assert!(!registry.contains("job", kind));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_len_counts_pairs_across_kinds() {
        let registry = ChangeRegistry::new();
        let template = PropertyKind::of::<TemplateProperty>();
        let implementation = PropertyKind::of::<ImplementationProperty>();

        let a = registry.track("folder/a", template);
        let b = registry.track("folder/b", template);
        let c = registry.track("folder/a", implementation);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("folder/a", implementation));
        assert!(!registry.contains("folder/b", implementation));

        drop(a);
        drop(c);
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("folder/a", template));
        assert!(registry.contains("folder/b", template));

        drop(b);
        assert!(registry.is_empty());
    }
}
