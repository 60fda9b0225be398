//! # eztemplates-std
//!
//! Standard implementations for EZ Templates property routing.
//!
//! This crate provides:
//! - **Routing**: [`PropertyRouter`] and its builder
//! - **Suppression**: [`ChangeRegistry`], the bulk-save claim set
//! - **Capability probes**: [`FixedCapability`], [`VersionProbe`]
//! - **Standard hooks**: [`FnHooks`], [`TracingHooks`]
//! - **Fan-out**: [`ListenerRegistry`]
//!
//! [`PropertyRouter`]: router::PropertyRouter
//! [`ChangeRegistry`]: registry::ChangeRegistry
//! [`FixedCapability`]: probe::FixedCapability
//! [`VersionProbe`]: probe::VersionProbe
//! [`FnHooks`]: hooks::FnHooks
//! [`TracingHooks`]: hooks::TracingHooks
//! [`ListenerRegistry`]: fanout::ListenerRegistry

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use eztemplates_core;

// Modules
pub mod fanout;
pub mod hooks;
pub mod probe;
pub mod registry;
pub mod router;
pub mod testing;
