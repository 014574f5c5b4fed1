use super::*;
use crate::node::fake::FakeNode;

#[test]
fn default_schedule_is_300_then_500() {
    let schedule = LoaderSchedule::from_config(&BehaviorConfig::default());
    assert_eq!(
        schedule,
        LoaderSchedule { mark_loaded_after_ms: 300, remove_after_ms: 500 }
    );
    assert_eq!(schedule.total_ms(), 800);
}

#[test]
fn schedule_follows_config_overrides() {
    let config = BehaviorConfig { loader_reveal_delay_ms: 0, loader_remove_delay_ms: 1200, ..BehaviorConfig::default() };
    let schedule = LoaderSchedule::from_config(&config);
    assert_eq!(schedule.mark_loaded_after_ms, 0);
    assert_eq!(schedule.remove_after_ms, 1200);
}

#[test]
fn total_saturates_instead_of_overflowing() {
    let schedule = LoaderSchedule { mark_loaded_after_ms: u32::MAX, remove_after_ms: 10 };
    assert_eq!(schedule.total_ms(), u32::MAX);
}

#[test]
fn steps_mark_then_detach() {
    let loader = FakeNode::with_classes(&["page-loader"]);

    mark_loaded(&loader);
    assert!(loader.has_class("loaded"));
    assert!(!loader.is_detached());

    dismiss(&loader);
    assert!(loader.is_detached());
}
