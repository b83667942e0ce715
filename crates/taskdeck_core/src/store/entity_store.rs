//! Generic collection store shared by all entity kinds.
//!
//! # Responsibility
//! - Provide ordered CRUD over one persisted collection.
//! - Keep the apply-then-persist write discipline in exactly one place.
//!
//! # Invariants
//! - The in-memory sequence preserves insertion order across mutations.
//! - Every mutation rewrites the full collection; there are no partial
//!   writes to recover from.

use crate::model::EntityId;
use crate::storage::{load_collection, save_collection, CollectionStorage, StorageResult};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record that can live in a persisted collection.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Storage key this entity kind is persisted under.
    const COLLECTION: &'static str;

    /// Stable identifier, unique within the collection.
    fn id(&self) -> EntityId;
}

/// Ordered in-memory collection backed by an injected storage handle.
pub struct EntityStore<E: Entity, S: CollectionStorage> {
    storage: S,
    records: Vec<E>,
}

impl<E: Entity, S: CollectionStorage> EntityStore<E, S> {
    /// Loads the persisted collection verbatim; a never-written key yields
    /// an empty store.
    pub fn open(storage: S) -> StorageResult<Self> {
        let records = load_collection(&storage, E::COLLECTION)?;
        Ok(Self { storage, records })
    }

    /// Loads the persisted collection, seeding and persisting `seed()` when
    /// the stored collection is empty.
    ///
    /// # Side effects
    /// - May perform one save call as part of seeding, so the very first
    ///   run leaves non-empty content behind for the next load.
    pub fn open_or_seed(storage: S, seed: impl FnOnce() -> Vec<E>) -> StorageResult<Self> {
        let mut store = Self::open(storage)?;
        if store.records.is_empty() {
            store.records = seed();
            info!(
                "event=collection_seed module=store status=ok collection={} count={}",
                E::COLLECTION,
                store.records.len()
            );
            store.persist()?;
        }
        Ok(store)
    }

    /// Current records in insertion order.
    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Looks up one record by id.
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Appends a record and persists the grown collection.
    ///
    /// The caller is responsible for handing in a record with a fresh id;
    /// constructors based on [`uuid::Uuid::new_v4`] satisfy that.
    pub fn insert(&mut self, entity: E) -> StorageResult<E> {
        self.records.push(entity.clone());
        self.persist()?;
        Ok(entity)
    }

    /// Mutates the record with the given id in place and persists.
    ///
    /// Returns `Ok(false)` without touching storage when the id is unknown;
    /// tolerating stale ids is part of the store contract.
    pub fn update_with(
        &mut self,
        id: EntityId,
        mutate: impl FnOnce(&mut E),
    ) -> StorageResult<bool> {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                mutate(record);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the record with the given id, if present, and persists.
    ///
    /// Idempotent: removing an absent id returns `Ok(false)` and performs
    /// no write.
    pub fn remove(&mut self, id: EntityId) -> StorageResult<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> StorageResult<()> {
        if let Err(err) = save_collection(&self.storage, E::COLLECTION, &self.records) {
            error!(
                "event=collection_save module=store status=error collection={} count={} error={err}",
                E::COLLECTION,
                self.records.len()
            );
            return Err(err);
        }
        Ok(())
    }
}
