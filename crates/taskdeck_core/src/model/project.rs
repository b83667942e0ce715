//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its draft/patch companions.
//! - Keep partial-merge update semantics next to the record they mutate.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - Every successful field merge refreshes `updated_at`.

use crate::model::{now_epoch_ms, EntityId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked project.
///
/// `color` is an opaque display token (the UI uses CSS color strings); core
/// never interprets it beyond storing and returning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable global id used for task linkage.
    pub id: EntityId,
    pub name: String,
    /// May be empty.
    pub description: String,
    /// Display token, e.g. `#3b82f6`.
    pub color: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds.
    pub updated_at: i64,
}

/// Caller-supplied fields for creating a project.
///
/// Presence validation (non-empty `name`) is the presentation boundary's
/// job and happens before this struct is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub color: String,
}

/// Partial update for a project; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl Project {
    /// Creates a project with a generated stable id and fresh timestamps.
    pub fn new(fields: NewProject) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            description: fields.description,
            color: fields.color,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges set patch fields over the record and refreshes `updated_at`.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        self.updated_at = now_epoch_ms();
    }
}
