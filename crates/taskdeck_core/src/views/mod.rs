//! Derived view logic.
//!
//! # Responsibility
//! - Compute dashboard aggregates, per-project progress and task lists from
//!   the current collections.
//!
//! # Invariants
//! - All functions are pure and recomputed on demand; nothing here is cached
//!   or persisted.

pub mod dashboard;
pub mod filter;

pub use dashboard::{
    dashboard_stats, project_progress, upcoming_deadlines, DashboardStats, StatusBreakdown,
};
pub use filter::{filter_tasks, TaskFilter};
