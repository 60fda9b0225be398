//! # eztemplates - Typed Property Lifecycle Routing
//!
//! Propagating template configuration to cloned jobs starts with knowing
//! *when* something happened to a template. The host fires generic item
//! lifecycle events; `eztemplates` narrows them down to the items carrying
//! one typed property and calls property-scoped hooks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eztemplates::prelude::*;
//! use std::sync::Arc;
//!
//! struct PushToChildren;
//!
//! impl PropertyHooks<Job, TemplateProperty> for PushToChildren {
//!     fn on_updated(&self, template: &Job, property: &TemplateProperty) -> Result<(), BoxError> {
//!         propagate(template, property)
//!     }
//! }
//!
//! let changes = Arc::new(ChangeRegistry::new());
//! let router = PropertyRouterBuilder::<TemplateProperty, _>::new(PushToChildren)
//!     .registry(changes.clone())
//!     .capability(VersionProbe::new(host_version, BULK_CHANGE_SINCE))
//!     .build()?;
//!
//! // host side
//! router.on_updated(&job)?;
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): structured logs and per-hook spans
//! - `macros`: `#[derive(JobProperty)]`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use eztemplates_core::{
    // Error types
    BoxError,
    DispatchError,
    // Events
    EventKinds,
    InitError,
    // Host model
    Item,
    // Listener
    ItemListener,
    JobProperty,
    LifecycleEvent,
    NoSuppression,
    // Hooks
    NoopHooks,
    PLUGIN_FAILURE_MESSAGE,
    PropertyHooks,
    PropertyKind,
    PropertyLookup,
    // Capability and suppression
    SaveCapability,
    SuppressionRegistry,
};

// Routing
pub use eztemplates_std::router::{PropertyRouter, PropertyRouterBuilder};

// Suppression
pub use eztemplates_std::registry::{ChangeGuard, ChangeRegistry};

// Fan-out
pub use eztemplates_std::fanout::{ListenerRegistry, ListenerRegistryBuilder};

/// Save capability probes.
pub mod probe {
    pub use eztemplates_std::probe::{FixedCapability, HostVersion, VersionError, VersionProbe};
}

/// Standard hook implementations.
pub mod hooks {
    pub use eztemplates_core::NoopHooks;
    pub use eztemplates_std::hooks::{FnHooks, TracingHooks};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use eztemplates_std::testing::*;
}

/// Prelude module - common imports for eztemplates.
///
/// # Usage
///
/// ```rust,ignore
/// use eztemplates::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, ChangeRegistry, DispatchError, EventKinds, InitError, Item, ItemListener,
        JobProperty, LifecycleEvent, PropertyHooks, PropertyKind, PropertyLookup, PropertyRouter,
        PropertyRouterBuilder, SaveCapability, SuppressionRegistry,
        hooks::FnHooks,
        probe::{FixedCapability, VersionProbe},
    };
}

#[cfg(feature = "macros")]
pub use eztemplates_macros::JobProperty;
