//! Host capability probe.

use crate::error::BoxError;

/// Reports whether the host saves jobs inside a bulk change.
///
/// When it does, a save listener provides a more precise change signal and
/// the generic Updated event is ignored. The probe is queried once, when a
/// router is constructed; it must be idempotent and side-effect free.
pub trait SaveCapability {
    /// Whether job saves are wrapped in a bulk change.
    fn job_save_uses_bulk_change(&self) -> Result<bool, BoxError>;
}

impl<F> SaveCapability for F
where
    F: Fn() -> Result<bool, BoxError>,
{
    fn job_save_uses_bulk_change(&self) -> Result<bool, BoxError> {
        (self)()
    }
}
