//! Core state management for the TaskDeck project tracker.
//!
//! Owns the three persisted collections (projects, tasks, team members),
//! the key-value persistence behind them, and the pure view computations a
//! presentation layer renders from. The presentation layer itself lives
//! outside this crate and only calls the store operations and view functions
//! exposed here.

pub mod db;
pub mod logging;
pub mod model;
pub mod sample;
pub mod storage;
pub mod store;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::member::{NewTeamMember, TeamMember, TeamMemberPatch};
pub use model::project::{NewProject, Project, ProjectPatch};
pub use model::task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::EntityId;
pub use sample::PRESET_COLORS;
pub use storage::{CollectionStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};
pub use store::{Entity, EntityStore, ProjectStore, TaskStore, TeamMemberStore};
pub use views::{
    dashboard_stats, filter_tasks, project_progress, upcoming_deadlines, DashboardStats,
    StatusBreakdown, TaskFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
