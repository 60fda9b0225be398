//! Closure-based hooks.

use eztemplates_core::{BoxError, JobProperty, PropertyHooks};
use std::fmt;

type ItemFn<I, P> = Box<dyn Fn(&I, &P) -> Result<(), BoxError> + Send + Sync>;
type CopyFn<I, P> = Box<dyn Fn(&I, &I, &P) -> Result<(), BoxError> + Send + Sync>;
type MoveFn<I, P> = Box<dyn Fn(&I, &str, &str, &P) -> Result<(), BoxError> + Send + Sync>;

/// A set of optional callbacks; events without one are no-ops.
///
/// # Example
///
/// ```rust,ignore
/// let hooks = FnHooks::new()
///     .updated(|job: &Job, property: &TemplateProperty| push_to_children(job, property))
///     .deleted(|job: &Job, _: &TemplateProperty| detach_children(job));
/// ```
pub struct FnHooks<I: ?Sized, P> {
    created: Option<ItemFn<I, P>>,
    copied: Option<CopyFn<I, P>>,
    deleted: Option<ItemFn<I, P>>,
    renamed: Option<MoveFn<I, P>>,
    location_changed: Option<MoveFn<I, P>>,
    updated: Option<ItemFn<I, P>>,
}

impl<I: ?Sized, P> FnHooks<I, P> {
    /// Create a set with no callbacks.
    pub fn new() -> Self {
        Self {
            created: None,
            copied: None,
            deleted: None,
            renamed: None,
            location_changed: None,
            updated: None,
        }
    }

    /// Callback for created items.
    pub fn created<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &P) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.created = Some(Box::new(f));
        self
    }

    /// Callback for copied items: `(source, item, property)`.
    pub fn copied<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &I, &P) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.copied = Some(Box::new(f));
        self
    }

    /// Callback for deleted items.
    pub fn deleted<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &P) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.deleted = Some(Box::new(f));
        self
    }

    /// Callback for renamed items: `(item, old_name, new_name, property)`.
    pub fn renamed<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &str, &str, &P) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.renamed = Some(Box::new(f));
        self
    }

    /// Callback for relocated items: `(item, old_full_name, new_full_name, property)`.
    pub fn location_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &str, &str, &P) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.location_changed = Some(Box::new(f));
        self
    }

    /// Callback for updated items.
    pub fn updated<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &P) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.updated = Some(Box::new(f));
        self
    }
}

impl<I: ?Sized, P> Default for FnHooks<I, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized, P: JobProperty> PropertyHooks<I, P> for FnHooks<I, P> {
    fn on_created(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.created.as_ref().map_or(Ok(()), |f| f(item, property))
    }

    fn on_copied(&self, source: &I, item: &I, property: &P) -> Result<(), BoxError> {
        self.copied
            .as_ref()
            .map_or(Ok(()), |f| f(source, item, property))
    }

    fn on_deleted(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.deleted.as_ref().map_or(Ok(()), |f| f(item, property))
    }

    fn on_renamed(
        &self,
        item: &I,
        old_name: &str,
        new_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        self.renamed
            .as_ref()
            .map_or(Ok(()), |f| f(item, old_name, new_name, property))
    }

    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        self.location_changed
            .as_ref()
            .map_or(Ok(()), |f| f(item, old_full_name, new_full_name, property))
    }

    fn on_updated(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.updated.as_ref().map_or(Ok(()), |f| f(item, property))
    }
}

impl<I: ?Sized, P> fmt::Debug for FnHooks<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHooks")
            .field("created", &self.created.is_some())
            .field("copied", &self.copied.is_some())
            .field("deleted", &self.deleted.is_some())
            .field("renamed", &self.renamed.is_some())
            .field("location_changed", &self.location_changed.is_some())
            .field("updated", &self.updated.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Marker(&'static str);
    impl JobProperty for Marker {}

    #[test]
    fn test_missing_callbacks_are_noops() {
        let hooks = FnHooks::<str, Marker>::new();
        assert!(hooks.on_created("job", &Marker("m")).is_ok());
        assert!(hooks.on_copied("a", "b", &Marker("m")).is_ok());
        assert!(hooks.on_updated("job", &Marker("m")).is_ok());
    }

    #[test]
    fn test_supplied_callbacks_run() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let renames = seen.clone();
        let hooks = FnHooks::<str, Marker>::new()
            .renamed(move |item: &str, old: &str, new: &str, property: &Marker| {
                renames
                    .lock()
                    .unwrap()
                    .push(format!("{item}:{old}->{new}:{}", property.0));
                Ok(())
            })
            .deleted(|_: &str, _: &Marker| Err("cannot delete template".into()));

        hooks.on_renamed("job", "old", "new", &Marker("m")).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["job:old->new:m".to_string()]);

        let err = hooks.on_deleted("job", &Marker("m")).unwrap_err();
        assert_eq!(err.to_string(), "cannot delete template");
    }
}
