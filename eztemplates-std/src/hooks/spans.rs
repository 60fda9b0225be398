use eztemplates_core::{BoxError, EventKinds, Item, JobProperty, PropertyHooks};

/// Hooks wrapper that runs every callback inside a `tracing` span.
///
/// The span carries the hook name, the event kind and the item's full name.
/// Without the `tracing` feature the wrapper is a plain passthrough.
pub struct TracingHooks<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHooks<H> {
    /// Wrap `inner`, labelling its spans with `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped hooks.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// The label used for spans.
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(feature = "tracing")]
    fn traced<I, F>(&self, kind: EventKinds, item: &I, call: F) -> Result<(), BoxError>
    where
        I: Item + ?Sized,
        F: FnOnce() -> Result<(), BoxError>,
    {
        let span = tracing::info_span!(
            "property_hook",
            hook = %self.name,
            event = %kind,
            item = item.full_name(),
        );
        span.in_scope(call)
    }

    #[cfg(not(feature = "tracing"))]
    fn traced<I, F>(&self, _kind: EventKinds, _item: &I, call: F) -> Result<(), BoxError>
    where
        I: Item + ?Sized,
        F: FnOnce() -> Result<(), BoxError>,
    {
        call()
    }
}

impl<H: Clone> Clone for TracingHooks<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<I, P, H> PropertyHooks<I, P> for TracingHooks<H>
where
    I: Item + ?Sized,
    P: JobProperty,
    H: PropertyHooks<I, P>,
{
    fn on_created(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.traced(EventKinds::CREATED, item, || {
            self.inner.on_created(item, property)
        })
    }

    fn on_copied(&self, source: &I, item: &I, property: &P) -> Result<(), BoxError> {
        self.traced(EventKinds::COPIED, item, || {
            self.inner.on_copied(source, item, property)
        })
    }

    fn on_deleted(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.traced(EventKinds::DELETED, item, || {
            self.inner.on_deleted(item, property)
        })
    }

    fn on_renamed(
        &self,
        item: &I,
        old_name: &str,
        new_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        self.traced(EventKinds::RENAMED, item, || {
            self.inner.on_renamed(item, old_name, new_name, property)
        })
    }

    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
        property: &P,
    ) -> Result<(), BoxError> {
        self.traced(EventKinds::LOCATION_CHANGED, item, || {
            self.inner
                .on_location_changed(item, old_full_name, new_full_name, property)
        })
    }

    fn on_updated(&self, item: &I, property: &P) -> Result<(), BoxError> {
        self.traced(EventKinds::UPDATED, item, || {
            self.inner.on_updated(item, property)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{HookCall, RecordingHooks, TestJob};

    #[derive(Clone, Debug, PartialEq)]
    struct Marker;
    impl JobProperty for Marker {}

    #[test]
    fn test_tracing_hooks_passthrough() {
        let recorder = RecordingHooks::<Marker>::new();
        let hooks = TracingHooks::new(recorder.clone(), "template");
        let job = TestJob::new("child");

        hooks.on_updated(&job, &Marker).unwrap();
        hooks.on_renamed(&job, "a", "b", &Marker).unwrap();

        assert_eq!(hooks.name(), "template");
        assert_eq!(
            recorder.calls(),
            vec![
                HookCall::Updated {
                    item: "child".into(),
                    property: Marker,
                },
                HookCall::Renamed {
                    item: "child".into(),
                    old_name: "a".into(),
                    new_name: "b".into(),
                    property: Marker,
                },
            ]
        );
    }
}
