use eztemplates_core::{BoxError, SaveCapability};

/// A capability probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapability {
    uses_bulk_change: bool,
}

impl FixedCapability {
    /// Report `uses_bulk_change` for every probe.
    pub const fn new(uses_bulk_change: bool) -> Self {
        Self { uses_bulk_change }
    }
}

impl SaveCapability for FixedCapability {
    fn job_save_uses_bulk_change(&self) -> Result<bool, BoxError> {
        Ok(self.uses_bulk_change)
    }
}
