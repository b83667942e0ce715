//! Dashboard aggregates.
//!
//! # Invariants
//! - Progress for a project with zero tasks is 0, never a division error.
//! - Deadline ordering is stable for equal due dates.

use crate::model::project::Project;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::EntityId;

/// How many entries the upcoming-deadlines panel shows.
const UPCOMING_LIMIT: usize = 5;

/// Task counts per status value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub todo: usize,
    pub in_progress: usize,
    pub review: usize,
    pub done: usize,
}

/// Aggregate counters for the dashboard header cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_tasks: usize,
    pub status: StatusBreakdown,
    /// Urgent-priority tasks that are not done yet.
    pub urgent_open: usize,
}

/// Computes the dashboard counters from the current collections.
pub fn dashboard_stats(projects: &[Project], tasks: &[Task]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_projects: projects.len(),
        total_tasks: tasks.len(),
        ..DashboardStats::default()
    };

    for task in tasks {
        match task.status {
            TaskStatus::Todo => stats.status.todo += 1,
            TaskStatus::InProgress => stats.status.in_progress += 1,
            TaskStatus::Review => stats.status.review += 1,
            TaskStatus::Done => stats.status.done += 1,
        }
        if task.priority == TaskPriority::Urgent && !task.is_done() {
            stats.urgent_open += 1;
        }
    }

    stats
}

/// Completion percentage for one project: `floor(100 * done / total)` over
/// the tasks referencing it, 0 when it has no tasks.
pub fn project_progress(project_id: EntityId, tasks: &[Task]) -> u8 {
    let mut total = 0usize;
    let mut done = 0usize;
    for task in tasks.iter().filter(|task| task.project_id == project_id) {
        total += 1;
        if task.is_done() {
            done += 1;
        }
    }

    if total == 0 {
        return 0;
    }
    (done * 100 / total) as u8
}

/// The up-to-five earliest-due open tasks.
///
/// Tasks without a due date or already done are excluded; ties keep their
/// original relative order.
pub fn upcoming_deadlines(tasks: &[Task]) -> Vec<&Task> {
    let mut upcoming: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.due_date.is_some() && !task.is_done())
        .collect();
    upcoming.sort_by_key(|task| task.due_date);
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}
