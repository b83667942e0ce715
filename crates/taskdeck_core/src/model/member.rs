//! Team-member domain model.
//!
//! Members are a selectable display-name source for task assignment; they own
//! no tasks and carry no lifecycle timestamps.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team member available for task assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: EntityId,
    pub name: String,
    pub role: String,
}

/// Caller-supplied fields for creating a team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
}

/// Partial update for a team member; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
}

impl TeamMember {
    /// Creates a member with a generated stable id.
    pub fn new(fields: NewTeamMember) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            role: fields.role,
        }
    }

    /// Merges set patch fields over the record.
    pub fn apply(&mut self, patch: TeamMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}
