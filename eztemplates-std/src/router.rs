//! # Typed property router
//!
//! [`PropertyRouter`] is the [`ItemListener`] the host sees. For every
//! lifecycle event it extracts the tracked property `P` from the affected
//! item and, if present, forwards a property-scoped call to its
//! [`PropertyHooks`].
//!
//! # Suppression
//!
//! Created, Copied, Deleted, Renamed and LocationChanged are forwarded
//! whenever the property is present. Updated is additionally skipped when:
//!
//! - the host saves jobs inside a bulk change (probed once at construction),
//!   since a save listener already reports the change, or
//! - the suppression registry claims the (item, `P`) pair.
//!
//! # Failures
//!
//! Hook failures are returned to the host. Updated failures are tagged
//! [`DispatchError::Update`]; every other event passes the hook's error
//! through as [`DispatchError::Hook`].

use eztemplates_core::{
    BoxError, DispatchError, EventKinds, InitError, Item, ItemListener, JobProperty, NoSuppression,
    PropertyHooks, PropertyKind, PropertyLookup, SaveCapability, SuppressionRegistry,
};
use std::{fmt, marker::PhantomData};

/// Routes lifecycle events for items carrying a property of type `P`.
pub struct PropertyRouter<P, H, R = NoSuppression> {
    hooks: H,
    registry: R,
    update_enabled: bool,
    kind: PropertyKind,
    _property: PhantomData<fn() -> P>,
}

impl<P, H, R> PropertyRouter<P, H, R>
where
    P: JobProperty,
    R: SuppressionRegistry,
{
    /// Create a router, probing the host once for bulk-change saves.
    ///
    /// Updated events are processed only when the host does not save jobs
    /// inside a bulk change. A failing probe is returned as
    /// [`InitError::Probe`].
    pub fn new<C>(hooks: H, registry: R, capability: &C) -> Result<Self, InitError>
    where
        C: SaveCapability + ?Sized,
    {
        let uses_bulk_change = capability
            .job_save_uses_bulk_change()
            .map_err(InitError::Probe)?;
        Ok(Self::with_update_enabled(hooks, registry, !uses_bulk_change))
    }

    /// Create a router with an explicit Updated switch, skipping the probe.
    pub fn with_update_enabled(hooks: H, registry: R, update_enabled: bool) -> Self {
        let kind = PropertyKind::of::<P>();
        #[cfg(feature = "tracing")]
        {
            tracing::info!(property = %kind, update_enabled, "property router initialized");
        }
        Self {
            hooks,
            registry,
            update_enabled,
            kind,
            _property: PhantomData,
        }
    }

    /// Whether Updated events are processed at all.
    pub fn update_enabled(&self) -> bool {
        self.update_enabled
    }

    /// The events this router processes; Updated is absent when disabled.
    pub fn handled_events(&self) -> EventKinds {
        if self.update_enabled {
            EventKinds::all()
        } else {
            EventKinds::UNCONDITIONAL
        }
    }

    /// The tag of the tracked property type.
    pub fn property_kind(&self) -> PropertyKind {
        self.kind
    }

    /// The hooks this router forwards to.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The suppression registry consulted for Updated events.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Consumes the router, returning its hooks.
    pub fn into_hooks(self) -> H {
        self.hooks
    }

    fn update_suppressed<I>(&self, item: &I) -> bool
    where
        I: Item + ?Sized,
    {
        if !self.update_enabled {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(item = item.full_name(), "updated event disabled on this host");
            }
            return true;
        }
        if self.registry.contains(item.full_name(), self.kind) {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(
                    item = item.full_name(),
                    property = %self.kind,
                    "updated event claimed by bulk save, skipping"
                );
            }
            return true;
        }
        false
    }

    /// Extracts `P` from `item` and runs `call` with it.
    ///
    /// Items without the property are a silent no-op.
    fn with_property<I, F>(&self, kind: EventKinds, item: &I, call: F) -> Result<(), BoxError>
    where
        I: Item + PropertyLookup<P> + ?Sized,
        F: FnOnce(&P) -> Result<(), BoxError>,
    {
        let Some(property) = item.property() else {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(item = item.full_name(), event = %kind, "no tracked property");
            }
            return Ok(());
        };
        call(property).inspect_err(|err| {
            #[cfg(feature = "tracing")]
            {
                tracing::warn!(
                    item = item.full_name(),
                    event = %kind,
                    error = %err,
                    "property hook failed"
                );
            }
            #[cfg(not(feature = "tracing"))]
            {
                let _ = (kind, err);
            }
        })
    }
}

impl<P, H, R, I> ItemListener<I> for PropertyRouter<P, H, R>
where
    P: JobProperty,
    H: PropertyHooks<I, P>,
    R: SuppressionRegistry,
    I: Item + PropertyLookup<P> + ?Sized,
{
    fn on_created(&self, item: &I) -> Result<(), DispatchError> {
        self.with_property(EventKinds::CREATED, item, |property| {
            self.hooks.on_created(item, property)
        })
        .map_err(DispatchError::hook)
    }

    fn on_copied(&self, source: &I, item: &I) -> Result<(), DispatchError> {
        self.with_property(EventKinds::COPIED, item, |property| {
            self.hooks.on_copied(source, item, property)
        })
        .map_err(DispatchError::hook)
    }

    fn on_deleted(&self, item: &I) -> Result<(), DispatchError> {
        self.with_property(EventKinds::DELETED, item, |property| {
            self.hooks.on_deleted(item, property)
        })
        .map_err(DispatchError::hook)
    }

    fn on_renamed(&self, item: &I, old_name: &str, new_name: &str) -> Result<(), DispatchError> {
        self.with_property(EventKinds::RENAMED, item, |property| {
            self.hooks.on_renamed(item, old_name, new_name, property)
        })
        .map_err(DispatchError::hook)
    }

    fn on_location_changed(
        &self,
        item: &I,
        old_full_name: &str,
        new_full_name: &str,
    ) -> Result<(), DispatchError> {
        self.with_property(EventKinds::LOCATION_CHANGED, item, |property| {
            self.hooks
                .on_location_changed(item, old_full_name, new_full_name, property)
        })
        .map_err(DispatchError::hook)
    }

    fn on_updated(&self, item: &I) -> Result<(), DispatchError> {
        if self.update_suppressed(item) {
            return Ok(());
        }
        self.with_property(EventKinds::UPDATED, item, |property| {
            self.hooks.on_updated(item, property)
        })
        .map_err(DispatchError::update)
    }

    fn handled_events(&self) -> EventKinds {
        PropertyRouter::handled_events(self)
    }
}

impl<P, H, R> fmt::Debug for PropertyRouter<P, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRouter")
            .field("property", &self.kind)
            .field("update_enabled", &self.update_enabled)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PropertyRouter`].
///
/// Without a capability or an explicit switch, Updated events are enabled.
pub struct PropertyRouterBuilder<P, H, R = NoSuppression> {
    hooks: H,
    registry: R,
    capability: Option<Box<dyn SaveCapability>>,
    update_enabled: Option<bool>,
    _property: PhantomData<fn() -> P>,
}

impl<P: JobProperty, H> PropertyRouterBuilder<P, H> {
    /// Start building a router around `hooks`.
    pub fn new(hooks: H) -> Self {
        Self {
            hooks,
            registry: NoSuppression,
            capability: None,
            update_enabled: None,
            _property: PhantomData,
        }
    }
}

impl<P: JobProperty, H, R: SuppressionRegistry> PropertyRouterBuilder<P, H, R> {
    /// Consult `registry` before dispatching Updated events.
    pub fn registry<R2: SuppressionRegistry>(self, registry: R2) -> PropertyRouterBuilder<P, H, R2> {
        PropertyRouterBuilder {
            hooks: self.hooks,
            registry,
            capability: self.capability,
            update_enabled: self.update_enabled,
            _property: PhantomData,
        }
    }

    /// Probe `capability` at build time to decide whether Updated is processed.
    pub fn capability<C: SaveCapability + 'static>(mut self, capability: C) -> Self {
        self.capability = Some(Box::new(capability));
        self
    }

    /// Force Updated processing on or off. Takes precedence over the probe.
    pub fn update_enabled(mut self, enabled: bool) -> Self {
        self.update_enabled = Some(enabled);
        self
    }

    /// Build the router.
    pub fn build(self) -> Result<PropertyRouter<P, H, R>, InitError> {
        match (self.update_enabled, self.capability) {
            (Some(enabled), _) => Ok(PropertyRouter::with_update_enabled(
                self.hooks,
                self.registry,
                enabled,
            )),
            (None, Some(capability)) => {
                PropertyRouter::new(self.hooks, self.registry, capability.as_ref())
            }
            (None, None) => Ok(PropertyRouter::with_update_enabled(
                self.hooks,
                self.registry,
                true,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        probe::FixedCapability,
        testing::{RecordingHooks, TestJob},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Tracked(u32);
    impl JobProperty for Tracked {}

    #[derive(Default)]
    struct CountUpdates(AtomicUsize);

    impl PropertyHooks<TestJob, Tracked> for CountUpdates {
        fn on_updated(&self, _item: &TestJob, _property: &Tracked) -> Result<(), BoxError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_probe_decides_update() {
        let router = PropertyRouter::<Tracked, _, _>::new(
            CountUpdates::default(),
            NoSuppression,
            &FixedCapability::new(true),
        )
        .unwrap();
        assert!(!router.update_enabled());
        assert_eq!(router.handled_events(), EventKinds::UNCONDITIONAL);

        let job = TestJob::new("child").with_property(Tracked(1));
        router.on_updated(&job).unwrap();
        assert_eq!(router.hooks().0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failing_probe_is_init_error() {
        let probe = || -> Result<bool, BoxError> { Err("version unavailable".into()) };
        let result =
            PropertyRouter::<Tracked, _, _>::new(CountUpdates::default(), NoSuppression, &probe);
        assert!(matches!(result, Err(InitError::Probe(_))));
    }

    #[test]
    fn test_builder_override_wins() {
        let router = PropertyRouterBuilder::<Tracked, _>::new(CountUpdates::default())
            .capability(FixedCapability::new(true))
            .update_enabled(true)
            .build()
            .unwrap();
        assert!(router.update_enabled());

        let job = TestJob::new("child").with_property(Tracked(1));
        router.on_updated(&job).unwrap();
        assert_eq!(router.hooks().0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handled_events_with_item_generic_hooks() {
        let disabled = PropertyRouter::<Tracked, _, _>::with_update_enabled(
            RecordingHooks::<Tracked>::new(),
            NoSuppression,
            false,
        );
        assert_eq!(disabled.handled_events(), EventKinds::UNCONDITIONAL);
        assert_eq!(
            ItemListener::<TestJob>::handled_events(&disabled),
            EventKinds::UNCONDITIONAL
        );

        let enabled = PropertyRouter::<Tracked, _, _>::with_update_enabled(
            RecordingHooks::<Tracked>::new(),
            NoSuppression,
            true,
        );
        assert!(enabled.handled_events().contains(EventKinds::UPDATED));
    }

    #[test]
    fn test_builder_defaults_to_enabled() {
        let router = PropertyRouterBuilder::<Tracked, _>::new(CountUpdates::default())
            .build()
            .unwrap();
        assert!(router.update_enabled());
        assert_eq!(router.property_kind(), PropertyKind::of::<Tracked>());
    }
}
