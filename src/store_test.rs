use super::*;

#[test]
fn memory_store_round_trip() {
    let store = MemoryStore::new();
    assert!(store.get("user").unwrap().is_none());

    store.set("user", "{\"token\":\"a\"}").unwrap();
    assert_eq!(store.get("user").unwrap().as_deref(), Some("{\"token\":\"a\"}"));

    store.delete("user").unwrap();
    assert!(store.get("user").unwrap().is_none());
}

#[test]
fn memory_store_overwrites() {
    let store = MemoryStore::new();
    store.set("user", "first").unwrap();
    store.set("user", "second").unwrap();
    assert_eq!(store.get("user").unwrap().as_deref(), Some("second"));
}

#[test]
fn memory_store_delete_missing_is_noop() {
    let store = MemoryStore::new();
    store.delete("user").unwrap();
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path()).unwrap();

    assert!(store.get("user").unwrap().is_none());
    store.set("user", "{\"token\":\"b\"}").unwrap();
    assert_eq!(store.get("user").unwrap().as_deref(), Some("{\"token\":\"b\"}"));

    store.delete("user").unwrap();
    assert!(store.get("user").unwrap().is_none());
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileStore::new(dir.path()).unwrap();
        store.set("user", "persisted").unwrap();
    }
    let reopened = FileStore::new(dir.path()).unwrap();
    assert_eq!(reopened.get("user").unwrap().as_deref(), Some("persisted"));
}

#[test]
fn file_store_delete_missing_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    store.delete("user").unwrap();
}

#[test]
fn file_store_creates_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("sessions").join("cache");
    let store = FileStore::new(&nested).unwrap();
    store.set("user", "x").unwrap();
    assert!(nested.join("user.json").exists());
}
