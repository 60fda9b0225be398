//! Version-based bulk-change detection.
//!
//! Hosts at or above a threshold release wrap job saves in a bulk change and
//! report them through their save listener instead.

use eztemplates_core::{BoxError, SaveCapability};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Errors parsing a host version number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The version string had no numeric part.
    #[error("empty version string")]
    Empty,

    /// A dotted segment was not a number.
    #[error("invalid segment `{segment}` in version `{version}`")]
    InvalidSegment {
        /// The full version string.
        version: String,
        /// The offending segment.
        segment: String,
    },
}

/// A dotted numeric version, e.g. `2.361.4`.
///
/// Qualifiers after the first `-` or whitespace (`1.625-SNAPSHOT`,
/// `2.0 (custom build)`) are ignored. Missing trailing segments compare as
/// zero, so `1.600` equals `1.600.0`.
#[derive(Debug, Clone)]
pub struct HostVersion {
    segments: Vec<u64>,
}

impl HostVersion {
    /// The numeric segments.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl FromStr for HostVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numeric = s
            .trim()
            .split(|c: char| c == '-' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        if numeric.is_empty() {
            return Err(VersionError::Empty);
        }
        let segments = numeric
            .split('.')
            .map(|segment| {
                segment
                    .parse::<u64>()
                    .map_err(|_| VersionError::InvalidSegment {
                        version: s.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| {
                let a = self.segments.get(i).copied().unwrap_or(0);
                let b = other.segments.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for HostVersion {}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

/// Reports bulk-change saves for hosts at or above a threshold version.
///
/// The host version is parsed lazily, when the probe runs, so a malformed
/// version string surfaces as a router construction error.
#[derive(Debug, Clone)]
pub struct VersionProbe {
    host: String,
    threshold: String,
}

impl VersionProbe {
    /// Compare `host` against `threshold`, the first release that saves jobs
    /// inside a bulk change.
    pub fn new(host: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            threshold: threshold.into(),
        }
    }

    /// Parse both versions and compare them.
    pub fn evaluate(&self) -> Result<bool, VersionError> {
        let host: HostVersion = self.host.parse()?;
        let threshold: HostVersion = self.threshold.parse()?;
        Ok(host >= threshold)
    }
}

impl SaveCapability for VersionProbe {
    fn job_save_uses_bulk_change(&self) -> Result<bool, BoxError> {
        let uses_bulk_change = self.evaluate()?;
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                host = %self.host,
                threshold = %self.threshold,
                uses_bulk_change,
                "probed host save capability"
            );
        }
        Ok(uses_bulk_change)
    }
}
