use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("darkMode"), None);
}

#[test]
fn memory_store_overwrites_values() {
    let store = MemoryStore::new();
    store.set("darkMode", "enabled").expect("set");
    store.set("darkMode", "disabled").expect("set");
    assert_eq!(store.get("darkMode").as_deref(), Some("disabled"));
}

#[test]
fn boxed_store_delegates() {
    let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
    store.set("k", "v").expect("set");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
