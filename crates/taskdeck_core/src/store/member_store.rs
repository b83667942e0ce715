//! Team-member store.
//!
//! Members feed the assignee picker at task-edit time; tasks reference them
//! by display name only, so member mutations never touch the task collection.

use crate::model::member::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::model::EntityId;
use crate::sample::sample_team_members;
use crate::storage::{CollectionStorage, StorageResult};
use crate::store::entity_store::{Entity, EntityStore};

impl Entity for TeamMember {
    const COLLECTION: &'static str = "pm_team_members";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Store for the team-member collection.
pub struct TeamMemberStore<S: CollectionStorage> {
    inner: EntityStore<TeamMember, S>,
}

impl<S: CollectionStorage> TeamMemberStore<S> {
    /// Opens the store over whatever is persisted, without demo seeding.
    pub fn open(storage: S) -> StorageResult<Self> {
        Ok(Self {
            inner: EntityStore::open(storage)?,
        })
    }

    /// Opens the store, seeding the bundled sample members when the
    /// persisted collection is empty.
    pub fn open_seeded(storage: S) -> StorageResult<Self> {
        Ok(Self {
            inner: EntityStore::open_or_seed(storage, sample_team_members)?,
        })
    }

    /// Creates a member with a fresh id, appends and persists.
    pub fn create(&mut self, fields: NewTeamMember) -> StorageResult<TeamMember> {
        self.inner.insert(TeamMember::new(fields))
    }

    /// Merges the patch into the member with the given id.
    ///
    /// Returns `Ok(false)` when the id is unknown; no error, no write.
    pub fn update(&mut self, id: EntityId, patch: TeamMemberPatch) -> StorageResult<bool> {
        self.inner.update_with(id, |member| member.apply(patch))
    }

    /// Deletes the member with the given id, if present.
    pub fn delete(&mut self, id: EntityId) -> StorageResult<bool> {
        self.inner.remove(id)
    }

    /// Current members in insertion order.
    pub fn members(&self) -> &[TeamMember] {
        self.inner.records()
    }
}
