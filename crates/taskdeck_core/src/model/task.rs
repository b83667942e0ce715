//! Task domain model.
//!
//! # Responsibility
//! - Define the task record with status/priority lifecycle metadata.
//! - Keep partial-merge update semantics next to the record they mutate.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `project_id` is a plain reference, not a checked foreign key: a task may
//!   outlive the project it points at and keeps the dangling id until edited.
//! - Every successful field merge refreshes `updated_at`.

use crate::model::{now_epoch_ms, EntityId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Waiting on review.
    Review,
    /// Completed.
    Done,
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A tracked task, always linked to a project by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global id.
    pub id: EntityId,
    pub title: String,
    /// May be empty.
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Free-text display name, not a `TeamMember` id.
    pub assignee: Option<String>,
    /// Due date in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Referenced project id; may dangle after project deletion.
    pub project_id: EntityId,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds.
    pub updated_at: i64,
}

/// Caller-supplied fields for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub due_date: Option<i64>,
    pub project_id: EntityId,
}

/// Partial update for a task; `None` fields are left untouched.
///
/// The nullable fields use a nested `Option` so a patch can distinguish
/// "leave as-is" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<Option<String>>,
    pub due_date: Option<Option<i64>>,
    pub project_id: Option<EntityId>,
}

impl Task {
    /// Creates a task with a generated stable id and fresh timestamps.
    pub fn new(fields: NewTask) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            assignee: fields.assignee,
            due_date: fields.due_date,
            project_id: fields.project_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges set patch fields over the record and refreshes `updated_at`.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
        self.updated_at = now_epoch_ms();
    }

    /// Returns whether this task counts toward completion metrics.
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
