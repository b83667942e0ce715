//! In-process collection storage.
//!
//! Backs entity stores with a plain map for tests and embeddings that do not
//! want an on-disk database. Never fails.

use crate::storage::{CollectionStorage, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Map-backed collection storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payloads: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any payload has been written for `collection`.
    pub fn contains(&self, collection: &str) -> bool {
        self.payloads.borrow().contains_key(collection)
    }
}

impl CollectionStorage for MemoryStorage {
    fn load_payload(&self, collection: &str) -> StorageResult<Option<String>> {
        Ok(self.payloads.borrow().get(collection).cloned())
    }

    fn save_payload(&self, collection: &str, payload: &str) -> StorageResult<()> {
        self.payloads
            .borrow_mut()
            .insert(collection.to_string(), payload.to_string());
        Ok(())
    }
}
