//! Error types for property routing.
//!
//! - [`DispatchError`] - A hook failed while a lifecycle event was dispatched
//! - [`InitError`] - A router could not be constructed

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message carried by failures of the Updated path.
pub const PLUGIN_FAILURE_MESSAGE: &str = "EZ Templates failed";

/// Errors returned from a lifecycle dispatch.
///
/// Created, Copied, Deleted, Renamed and LocationChanged failures are passed
/// through untouched as [`DispatchError::Hook`]: `Display` and `source()` are
/// those of the hook's own error. Updated failures are tagged as
/// [`DispatchError::Update`] with [`PLUGIN_FAILURE_MESSAGE`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A hook failed; the original error is propagated as is.
    #[error(transparent)]
    Hook(BoxError),

    /// The Updated hook failed.
    #[error("EZ Templates failed")]
    Update {
        /// The hook's error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Wraps a hook failure from one of the unconditional events.
    pub fn hook(err: BoxError) -> Self {
        DispatchError::Hook(err)
    }

    /// Wraps a hook failure from the Updated event.
    pub fn update(err: BoxError) -> Self {
        DispatchError::Update { source: err }
    }

    /// Whether this failure was tagged as originating in the plugin.
    pub fn is_plugin_failure(&self) -> bool {
        matches!(self, DispatchError::Update { .. })
    }

    /// Borrows the hook's original error.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            DispatchError::Hook(err) | DispatchError::Update { source: err } => err.as_ref(),
        }
    }

    /// Returns the hook's original error.
    pub fn into_inner(self) -> BoxError {
        match self {
            DispatchError::Hook(err) | DispatchError::Update { source: err } => err,
        }
    }
}

/// Errors that can occur while constructing a router.
#[derive(Error, Debug)]
pub enum InitError {
    /// The bulk-change capability probe failed.
    #[error("save capability probe failed: {0}")]
    Probe(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("disk full")]
    struct DiskFull;

    #[test]
    fn test_hook_error_is_transparent() {
        let err = DispatchError::hook(Box::new(DiskFull));
        assert_eq!(err.to_string(), "disk full");
        assert!(!err.is_plugin_failure());
        assert!(err.inner().is::<DiskFull>());
    }

    #[test]
    fn test_update_error_is_tagged() {
        let err = DispatchError::update(Box::new(DiskFull));
        assert_eq!(err.to_string(), PLUGIN_FAILURE_MESSAGE);
        assert!(err.is_plugin_failure());

        let source = err.source().expect("tagged error keeps its cause");
        assert_eq!(source.to_string(), "disk full");
        assert!(err.into_inner().downcast::<DiskFull>().is_ok());
    }
}
