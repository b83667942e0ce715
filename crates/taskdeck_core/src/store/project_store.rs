//! Project store.
//!
//! # Responsibility
//! - Typed CRUD entry points for the project collection.
//!
//! # Invariants
//! - Deleting a project leaves tasks referencing it untouched; consumers
//!   resolve the resulting dangling ids to an absent project label.

use crate::model::project::{NewProject, Project, ProjectPatch};
use crate::model::EntityId;
use crate::sample::sample_projects;
use crate::storage::{CollectionStorage, StorageResult};
use crate::store::entity_store::{Entity, EntityStore};

impl Entity for Project {
    const COLLECTION: &'static str = "pm_projects";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Store for the project collection.
pub struct ProjectStore<S: CollectionStorage> {
    inner: EntityStore<Project, S>,
}

impl<S: CollectionStorage> ProjectStore<S> {
    /// Opens the store over whatever is persisted, without demo seeding.
    pub fn open(storage: S) -> StorageResult<Self> {
        Ok(Self {
            inner: EntityStore::open(storage)?,
        })
    }

    /// Opens the store, seeding the bundled sample projects when the
    /// persisted collection is empty.
    pub fn open_seeded(storage: S) -> StorageResult<Self> {
        Ok(Self {
            inner: EntityStore::open_or_seed(storage, sample_projects)?,
        })
    }

    /// Creates a project with fresh id and timestamps, appends and persists.
    pub fn create(&mut self, fields: NewProject) -> StorageResult<Project> {
        self.inner.insert(Project::new(fields))
    }

    /// Merges the patch into the project with the given id.
    ///
    /// Returns `Ok(false)` when the id is unknown; no error, no write.
    pub fn update(&mut self, id: EntityId, patch: ProjectPatch) -> StorageResult<bool> {
        self.inner.update_with(id, |project| project.apply(patch))
    }

    /// Deletes the project with the given id, if present.
    pub fn delete(&mut self, id: EntityId) -> StorageResult<bool> {
        self.inner.remove(id)
    }

    /// Current projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        self.inner.records()
    }

    /// Resolves a project id, e.g. a task's `project_id`, which may dangle.
    pub fn get(&self, id: EntityId) -> Option<&Project> {
        self.inner.get(id)
    }
}
