//! # eztemplates-core
//!
//! Core traits for routing host item lifecycle events to property-scoped
//! hooks.
//!
//! This crate has minimal dependencies and is meant to be imported by host
//! integrations and hook implementations that don't need `eztemplates-std`.
//!
//! # Layers
//!
//! ## Inbound ([`ItemListener`])
//!
//! The host fires one notification per lifecycle event: created, copied,
//! deleted, renamed, location changed, updated. Each call is synchronous and
//! returns a [`DispatchError`] instead of panicking or swallowing failures.
//!
//! ## Gatekeeping ([`PropertyLookup`], [`SuppressionRegistry`], [`SaveCapability`])
//!
//! Only items carrying a property of the tracked type are of interest. The
//! Updated event is additionally gated by a construction-time capability
//! probe and by the bulk-save suppression registry.
//!
//! ## Outbound ([`PropertyHooks`])
//!
//! Property-scoped callbacks with no-op defaults. Implementations override
//! only the events they care about.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Hook failures, passthrough or tagged
//! - [`InitError`] - Router construction failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod capability;
mod error;
mod event;
mod hooks;
mod item;
mod listener;
mod registry;

// Re-exports
pub use capability::SaveCapability;
pub use error::{BoxError, DispatchError, InitError, PLUGIN_FAILURE_MESSAGE};
pub use event::{EventKinds, LifecycleEvent};
pub use hooks::{NoopHooks, PropertyHooks};
pub use item::{Item, JobProperty, PropertyKind, PropertyLookup};
pub use listener::ItemListener;
pub use registry::{NoSuppression, SuppressionRegistry};
