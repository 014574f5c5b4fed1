use super::*;
use crate::node::fake::FakeNode;
use crate::storage::MemoryStore;

fn stored(value: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.set(DARK_MODE_STORAGE_KEY, value).expect("seed store");
    store
}

#[test]
fn preference_strings_match_storage_contract() {
    assert_eq!(Preference::Enabled.as_str(), "enabled");
    assert_eq!(Preference::Disabled.as_str(), "disabled");
    assert_eq!(Preference::parse("enabled"), Some(Preference::Enabled));
    assert_eq!(Preference::parse("true"), None);
}

#[test]
fn restore_applies_enabled_preference() {
    let body = FakeNode::new();
    let dark_mode = DarkMode::new(stored("enabled"));
    assert!(dark_mode.restore(&body));
    assert!(body.has_class("dark-mode"));
}

#[test]
fn restore_leaves_light_default_alone() {
    for store in [MemoryStore::new(), stored("disabled"), stored("garbage")] {
        let body = FakeNode::new();
        assert!(!DarkMode::new(store).restore(&body));
        assert!(!body.has_class("dark-mode"));
    }
}

#[test]
fn toggle_writes_resulting_state() {
    let body = FakeNode::new();
    let dark_mode = DarkMode::new(MemoryStore::new());

    assert!(dark_mode.toggle(&body).expect("toggle"));
    assert!(body.has_class("dark-mode"));
    assert_eq!(dark_mode.read_preference(), Some(Preference::Enabled));

    assert!(!dark_mode.toggle(&body).expect("toggle"));
    assert!(!body.has_class("dark-mode"));
    assert_eq!(dark_mode.read_preference(), Some(Preference::Disabled));
}

#[test]
fn toggling_twice_round_trips_class_and_flag() {
    let body = FakeNode::with_classes(&["dark-mode"]);
    let dark_mode = DarkMode::new(stored("enabled"));

    dark_mode.toggle(&body).expect("toggle");
    dark_mode.toggle(&body).expect("toggle");

    assert!(body.has_class("dark-mode"));
    assert_eq!(dark_mode.read_preference(), Some(Preference::Enabled));
}
