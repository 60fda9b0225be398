//! Save capability probes.
//!
//! - [`FixedCapability`] - A known answer, for hosts that report it directly
//! - [`VersionProbe`] - Derives the answer from the host's version number

mod fixed;
mod version;

pub use fixed::FixedCapability;
pub use version::{HostVersion, VersionError, VersionProbe};
