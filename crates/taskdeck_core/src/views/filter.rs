//! Task list filtering.

use crate::model::task::{Task, TaskStatus};
use crate::model::EntityId;

/// Independent status and project filters, AND-combined.
///
/// `None` means "all" for either axis; the default filter passes everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub project: Option<EntityId>,
}

impl TaskFilter {
    /// Whether one task passes both filter axes.
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status != status) {
            return false;
        }
        if self.project.is_some_and(|project| task.project_id != project) {
            return false;
        }
        true
    }
}

/// Tasks passing the filter, in their original relative order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
