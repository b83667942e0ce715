//! Task store.
//!
//! # Responsibility
//! - Typed CRUD entry points for the task collection.
//!
//! # Invariants
//! - `project_id` is stored as given; the store never checks whether the
//!   referenced project still exists.

use crate::model::task::{NewTask, Task, TaskPatch};
use crate::model::EntityId;
use crate::sample::sample_tasks;
use crate::storage::{CollectionStorage, StorageResult};
use crate::store::entity_store::{Entity, EntityStore};

impl Entity for Task {
    const COLLECTION: &'static str = "pm_tasks";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Store for the task collection.
pub struct TaskStore<S: CollectionStorage> {
    inner: EntityStore<Task, S>,
}

impl<S: CollectionStorage> TaskStore<S> {
    /// Opens the store over whatever is persisted, without demo seeding.
    pub fn open(storage: S) -> StorageResult<Self> {
        Ok(Self {
            inner: EntityStore::open(storage)?,
        })
    }

    /// Opens the store, seeding the bundled sample tasks when the persisted
    /// collection is empty.
    pub fn open_seeded(storage: S) -> StorageResult<Self> {
        Ok(Self {
            inner: EntityStore::open_or_seed(storage, sample_tasks)?,
        })
    }

    /// Creates a task with fresh id and timestamps, appends and persists.
    pub fn create(&mut self, fields: NewTask) -> StorageResult<Task> {
        self.inner.insert(Task::new(fields))
    }

    /// Merges the patch into the task with the given id.
    ///
    /// Returns `Ok(false)` when the id is unknown; no error, no write.
    pub fn update(&mut self, id: EntityId, patch: TaskPatch) -> StorageResult<bool> {
        self.inner.update_with(id, |task| task.apply(patch))
    }

    /// Deletes the task with the given id, if present.
    pub fn delete(&mut self, id: EntityId) -> StorageResult<bool> {
        self.inner.remove(id)
    }

    /// Current tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.inner.records()
    }

    /// Looks up one task by id.
    pub fn get(&self, id: EntityId) -> Option<&Task> {
        self.inner.get(id)
    }
}
