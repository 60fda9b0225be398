//! Testing utilities for property routing.
//!
//! - [`TestJob`]: An in-memory item carrying any set of typed properties
//! - [`RecordingHooks`]: Hooks that record every call and can fail on demand
//! - [`HookFailure`]: The error returned by failing [`RecordingHooks`]

use eztemplates_core::{BoxError, EventKinds, Item, JobProperty, PropertyHooks, PropertyLookup};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};
use thiserror::Error;

// ============================================================================
// Test Job
// ============================================================================

/// An in-memory job with a typed property map.
///
/// # Example
///
/// ```rust,ignore
/// let job = TestJob::in_folder("templates", "base").with_property(TemplateProperty);
/// assert_eq!(job.full_name(), "templates/base");
/// ```
pub struct TestJob {
    name: String,
    full_name: String,
    properties: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl TestJob {
    /// A top-level job; its full name equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            full_name: name.clone(),
            name,
            properties: HashMap::new(),
        }
    }

    /// A job inside `folder`.
    pub fn in_folder(folder: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            full_name: format!("{folder}/{name}"),
            name,
            properties: HashMap::new(),
        }
    }

    /// Attach a property, replacing any previous one of the same type.
    pub fn with_property<P: JobProperty>(mut self, property: P) -> Self {
        self.set_property(property);
        self
    }

    /// Attach a property in place.
    pub fn set_property<P: JobProperty>(&mut self, property: P) {
        self.properties.insert(TypeId::of::<P>(), Box::new(property));
    }

    /// Detach the property of type `P`.
    pub fn remove_property<P: JobProperty>(&mut self) {
        self.properties.remove(&TypeId::of::<P>());
    }
}

impl Item for TestJob {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl<P: JobProperty> PropertyLookup<P> for TestJob {
    fn property(&self) -> Option<&P> {
        self.properties
            .get(&TypeId::of::<P>())
            .and_then(|property| (**property).downcast_ref::<P>())
    }
}

impl fmt::Debug for TestJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestJob")
            .field("full_name", &self.full_name)
            .field("properties", &self.properties.len())
            .finish()
    }
}

// ============================================================================
// Recording Hooks
// ============================================================================

/// A recorded hook invocation. Items are recorded by full name.
#[derive(Debug, Clone, PartialEq)]
pub enum HookCall<P> {
    /// `on_created`
    Created {
        /// Item full name.
        item: String,
        /// Property passed to the hook.
        property: P,
    },
    /// `on_copied`
    Copied {
        /// Source full name.
        source: String,
        /// New item full name.
        item: String,
        /// Property passed to the hook.
        property: P,
    },
    /// `on_deleted`
    Deleted {
        /// Item full name.
        item: String,
        /// Property passed to the hook.
        property: P,
    },
    /// `on_renamed`
    Renamed {
        /// Item full name.
        item: String,
        /// Old short name.
        old_name: String,
        /// New short name.
        new_name: String,
        /// Property passed to the hook.
        property: P,
    },
    /// `on_location_changed`
    LocationChanged {
        /// Item full name.
        item: String,
        /// Old full name.
        old_full_name: String,
        /// New full name.
        new_full_name: String,
        /// Property passed to the hook.
        property: P,
    },
    /// `on_updated`
    Updated {
        /// Item full name.
        item: String,
        /// Property passed to the hook.
        property: P,
    },
}

impl<P> HookCall<P> {
    /// The event kind of this call.
    pub fn kind(&self) -> EventKinds {
        match self {
            HookCall::Created { .. } => EventKinds::CREATED,
            HookCall::Copied { .. } => EventKinds::COPIED,
            HookCall::Deleted { .. } => EventKinds::DELETED,
            HookCall::Renamed { .. } => EventKinds::RENAMED,
            HookCall::LocationChanged { .. } => EventKinds::LOCATION_CHANGED,
            HookCall::Updated { .. } => EventKinds::UPDATED,
        }
    }
}

/// The error returned by [`RecordingHooks`] for events it was told to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HookFailure {
    /// The configured message.
    pub message: String,
}

/// Hooks that record every call.
///
/// Clones share the same record. The call is recorded before any configured
/// failure is returned.
pub struct RecordingHooks<P> {
    calls: Arc<Mutex<Vec<HookCall<P>>>>,
    fail_on: EventKinds,
    message: Arc<str>,
}

impl<P: Clone> RecordingHooks<P> {
    /// Create recording hooks that never fail.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: EventKinds::empty(),
            message: Arc::from("hook failed"),
        }
    }

    /// Fail with [`HookFailure`] for the given event kinds.
    pub fn fail_on(mut self, kinds: EventKinds, message: impl Into<String>) -> Self {
        self.fail_on = kinds;
        self.message = Arc::from(message.into());
        self
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<HookCall<P>> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of recorded calls of the given kind.
    pub fn count_of(&self, kind: EventKinds) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.kind() == kind)
            .count()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: HookCall<P>) -> Result<(), BoxError> {
        let kind = call.kind();
        self.calls.lock().unwrap().push(call);
        if self.fail_on.contains(kind) {
            Err(Box::new(HookFailure {
                message: self.message.to_string(),
            }))
        } else {
            Ok(())
        }
    }
}

impl<P: Clone> Default for RecordingHooks<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for RecordingHooks<P> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            fail_on: self.fail_on,
            message: self.message.clone(),
        }
    }
}

impl<I, P> PropertyHooks<I, P> for RecordingHooks<P>
where
    I: Item + ?Sized,
    P: JobProperty + Clone,
{
    fn on_created(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.record(HookCall::Created {
            item: item.full_name().to_string(),
            property: property.clone(),
        })
    }

    fn on_copied(&self, source: &I, item: &I, property: &P) -> Result<(), BoxError> {
        self.record(HookCall::Copied {
            source: source.full_name().to_string(),
            item: item.full_name().to_string(),
            property: property.clone(),
        })
    }

    fn on_deleted(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.record(HookCall::Deleted {
            item: item.full_name().to_string(),
            property: property.clone(),
        })
    }

    fn on_renamed(
        &self,
        item: &I,
        old_name: &str,
        new_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        self.record(HookCall::Renamed {
            item: item.full_name().to_string(),
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            property: property.clone(),
        })
    }

    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        self.record(HookCall::LocationChanged {
            item: item.full_name().to_string(),
            old_full_name: old_full_name.to_string(),
            new_full_name: new_full_name.to_string(),
            property: property.clone(),
        })
    }

    fn on_updated(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.record(HookCall::Updated {
            item: item.full_name().to_string(),
            property: property.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Template(&'static str);
    impl JobProperty for Template {}

    #[derive(Debug, Clone, PartialEq)]
    struct Other;
    impl JobProperty for Other {}

    #[test]
    fn test_job_property_lookup() {
        let mut job = TestJob::in_folder("templates", "base").with_property(Template("v1"));
        assert_eq!(job.name(), "base");
        assert_eq!(job.full_name(), "templates/base");
        assert_eq!(PropertyLookup::<Template>::property(&job), Some(&Template("v1")));
        assert_eq!(PropertyLookup::<Other>::property(&job), None);

        job.set_property(Template("v2"));
        assert_eq!(PropertyLookup::<Template>::property(&job), Some(&Template("v2")));

        job.remove_property::<Template>();
        assert_eq!(PropertyLookup::<Template>::property(&job), None);
    }

    #[test]
    fn test_recording_hooks_fail_after_recording() {
        let hooks = RecordingHooks::<Template>::new().fail_on(EventKinds::DELETED, "boom");
        let job = TestJob::new("job");

        hooks.on_created(&job, &Template("v1")).unwrap();
        let err = hooks.on_deleted(&job, &Template("v1")).unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert!(err.downcast_ref::<HookFailure>().is_some());
        assert_eq!(hooks.count(), 2);
        assert_eq!(hooks.count_of(EventKinds::DELETED), 1);

        hooks.clear();
        assert_eq!(hooks.count(), 0);
    }
}
