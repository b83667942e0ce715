use std::cell::Cell;
use taskdeck_core::storage::{CollectionStorage, StorageResult};
use taskdeck_core::{MemoryStorage, NewProject, ProjectStore, StorageError};

/// Backend that can be told to reject writes, standing in for a full or
/// read-only storage medium.
struct FlakyStorage {
    inner: MemoryStorage,
    reject_saves: Cell<bool>,
}

impl FlakyStorage {
    fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            reject_saves: Cell::new(false),
        }
    }
}

impl CollectionStorage for FlakyStorage {
    fn load_payload(&self, collection: &str) -> StorageResult<Option<String>> {
        self.inner.load_payload(collection)
    }

    fn save_payload(&self, collection: &str, payload: &str) -> StorageResult<()> {
        if self.reject_saves.get() {
            return Err(StorageError::Backend {
                collection: collection.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.inner.save_payload(collection, payload)
    }
}

fn draft(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: String::new(),
        color: "#06b6d4".to_string(),
    }
}

#[test]
fn failed_save_surfaces_but_keeps_optimistic_memory_state() {
    let storage = FlakyStorage::new();
    let mut store = ProjectStore::open(&storage).unwrap();
    store.create(draft("persisted")).unwrap();

    storage.reject_saves.set(true);
    let err = store.create(draft("memory-only")).unwrap_err();
    assert!(matches!(err, StorageError::Backend { .. }));

    // The mutation was applied before the write failed; memory is the
    // best-effort current view.
    let names: Vec<_> = store.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["persisted", "memory-only"]);

    // Storage still holds the last successful write.
    let reloaded = ProjectStore::open(&storage.inner).unwrap();
    assert_eq!(reloaded.projects().len(), 1);
    assert_eq!(reloaded.projects()[0].name, "persisted");
}

#[test]
fn store_remains_usable_after_a_failure() {
    let storage = FlakyStorage::new();
    let mut store = ProjectStore::open(&storage).unwrap();

    storage.reject_saves.set(true);
    store.create(draft("lost write")).unwrap_err();

    storage.reject_saves.set(false);
    let recovered = store.create(draft("recovered")).unwrap();
    assert!(store.projects().iter().any(|p| p.id == recovered.id));

    // The next successful full-collection write also flushes the earlier
    // memory-only record.
    let reloaded = ProjectStore::open(&storage.inner).unwrap();
    let names: Vec<_> = reloaded.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["lost write", "recovered"]);
}

#[test]
fn failed_delete_surfaces_and_memory_stays_removed() {
    let storage = FlakyStorage::new();
    let mut store = ProjectStore::open(&storage).unwrap();
    let created = store.create(draft("target")).unwrap();

    storage.reject_saves.set(true);
    let err = store.delete(created.id).unwrap_err();
    assert!(matches!(err, StorageError::Backend { .. }));
    assert!(store.projects().is_empty());
}
