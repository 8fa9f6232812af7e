use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::default();
    assert!(storage.get("token").is_none());

    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));

    storage.set("token", "def");
    assert_eq!(storage.get("token").as_deref(), Some("def"));

    storage.remove("token");
    assert!(storage.get("token").is_none());
    assert_eq!(storage.len(), 0);
}

#[test]
fn memory_storage_remove_absent_key_is_noop() {
    let storage = MemoryStorage::default();
    storage.remove("nope");
    assert_eq!(storage.len(), 0);
}

#[test]
fn browser_storage_is_inert_off_browser() {
    // Without a window there is nothing to read; writes must not panic.
    let storage = BrowserStorage;
    storage.set("token", "abc");
    assert!(storage.get("token").is_none());
    storage.remove("token");
}
