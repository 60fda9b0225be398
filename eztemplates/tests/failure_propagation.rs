//! Hook failures reach the caller, tagged only on the Updated path.

use eztemplates::{
    DispatchError, EventKinds, ItemListener, PLUGIN_FAILURE_MESSAGE,
    testing::HookFailure,
};
use std::error::Error as _;

mod common;
use common::{Recorder, plain_job, router, template_job};

#[test]
fn test_deleted_failure_propagates() {
    let hooks = Recorder::new().fail_on(EventKinds::DELETED, "template still in use");
    let router = router(hooks.clone());

    let err = router.on_deleted(&template_job("base")).unwrap_err();

    assert!(matches!(err, DispatchError::Hook(_)));
    assert!(!err.is_plugin_failure());
    assert_eq!(err.to_string(), "template still in use");
    assert!(err.inner().is::<HookFailure>());
    assert_eq!(hooks.count_of(EventKinds::DELETED), 1);
}

#[test]
fn test_unconditional_failures_keep_original_error() {
    let hooks = Recorder::new().fail_on(EventKinds::UNCONDITIONAL, "nope");
    let router = router(hooks);
    let job = template_job("base");
    let source = plain_job("origin");

    let failures = [
        router.on_created(&job),
        router.on_copied(&source, &job),
        router.on_renamed(&job, "a", "b"),
        router.on_location_changed(&job, "x/a", "y/a"),
    ];

    for result in failures {
        let err = result.unwrap_err();
        assert!(!err.is_plugin_failure());
        let original = err.into_inner().downcast::<HookFailure>().unwrap();
        assert_eq!(original.message, "nope");
    }
}

#[test]
fn test_updated_failure_is_tagged() {
    let hooks = Recorder::new().fail_on(EventKinds::UPDATED, "merge conflict");
    let router = router(hooks);

    let err = router.on_updated(&template_job("base")).unwrap_err();

    assert!(err.is_plugin_failure());
    assert_eq!(err.to_string(), PLUGIN_FAILURE_MESSAGE);
    let cause = err.source().unwrap();
    assert_eq!(cause.to_string(), "merge conflict");
    assert!(err.inner().is::<HookFailure>());
}

#[test]
fn test_failures_need_the_property() {
    let hooks = Recorder::new().fail_on(EventKinds::all(), "boom");
    let router = router(hooks.clone());
    let job = plain_job("plain");

    assert!(router.on_deleted(&job).is_ok());
    assert!(router.on_updated(&job).is_ok());
    assert_eq!(hooks.count(), 0);
}

#[test]
fn test_failure_does_not_poison_router() {
    let hooks = Recorder::new().fail_on(EventKinds::CREATED, "first");
    let router = router(hooks.clone());
    let job = template_job("base");

    assert!(router.on_created(&job).is_err());
    assert!(router.on_updated(&job).is_ok());
    assert_eq!(hooks.count(), 2);
}
