#![cfg(feature = "macros")]

use eztemplates::{
    ItemListener, JobProperty, PropertyKind, PropertyRouter, NoSuppression,
    testing::{RecordingHooks, TestJob},
};

#[derive(Clone, Debug, PartialEq, eztemplates::JobProperty)]
struct DerivedProperty {
    template: String,
}

#[derive(Clone, Debug, PartialEq, eztemplates::JobProperty)]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn test_derive_job_property() {
    fn assert_property<T: JobProperty>() {}
    assert_property::<DerivedProperty>();
    assert_property::<Wrapper<u32>>();
    assert_ne!(
        PropertyKind::of::<Wrapper<u32>>(),
        PropertyKind::of::<Wrapper<String>>()
    );
}

#[test]
fn test_derived_property_routes() {
    let hooks = RecordingHooks::<DerivedProperty>::new();
    let router = PropertyRouter::<DerivedProperty, _, _>::with_update_enabled(
        hooks.clone(),
        NoSuppression,
        true,
    );
    let job = TestJob::new("base").with_property(DerivedProperty {
        template: "base".into(),
    });

    router.on_created(&job).unwrap();
    assert_eq!(hooks.count(), 1);
}
