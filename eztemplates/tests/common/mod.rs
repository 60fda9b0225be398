#![allow(dead_code)]

use eztemplates::{
    ChangeRegistry, JobProperty, NoSuppression, PropertyRouter, SuppressionRegistry,
    testing::{RecordingHooks, TestJob},
};

// ============================================================================
// Test Property Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateProperty {
    pub sync_description: bool,
}

impl JobProperty for TemplateProperty {}

#[derive(Clone, Debug, PartialEq)]
pub struct ImplementationProperty {
    pub template: String,
}

impl JobProperty for ImplementationProperty {}

// ============================================================================
// Fixtures
// ============================================================================

pub fn template() -> TemplateProperty {
    TemplateProperty {
        sync_description: true,
    }
}

pub fn template_job(name: &str) -> TestJob {
    TestJob::in_folder("templates", name).with_property(template())
}

pub fn plain_job(name: &str) -> TestJob {
    TestJob::in_folder("jobs", name)
}

pub type Recorder = RecordingHooks<TemplateProperty>;

pub fn router_with<R: SuppressionRegistry>(
    hooks: Recorder,
    registry: R,
    update_enabled: bool,
) -> PropertyRouter<TemplateProperty, Recorder, R> {
    PropertyRouter::with_update_enabled(hooks, registry, update_enabled)
}

pub fn router(hooks: Recorder) -> PropertyRouter<TemplateProperty, Recorder, NoSuppression> {
    router_with(hooks, NoSuppression, true)
}

pub fn shared_registry() -> std::sync::Arc<ChangeRegistry> {
    std::sync::Arc::new(ChangeRegistry::new())
}
