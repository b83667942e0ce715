use taskdeck_core::{
    dashboard_stats, filter_tasks, project_progress, upcoming_deadlines, EntityId, NewProject,
    Project, Task, TaskFilter, TaskPriority, TaskStatus,
};
use uuid::Uuid;

// Epoch ms for 2024-03-10, 2024-04-20 and 2024-05-01 (all midnight UTC).
const MAR_10: i64 = 1_710_028_800_000;
const APR_20: i64 = 1_713_571_200_000;
const MAY_01: i64 = 1_714_521_600_000;

fn project(name: &str) -> Project {
    Project::new(NewProject {
        name: name.to_string(),
        description: String::new(),
        color: "#8b5cf6".to_string(),
    })
}

fn task(title: &str, status: TaskStatus, project_id: EntityId) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        status,
        priority: TaskPriority::Medium,
        assignee: None,
        due_date: None,
        project_id,
        created_at: 0,
        updated_at: 0,
    }
}

#[test]
fn stats_count_totals_statuses_and_open_urgent_tasks() {
    let projects = vec![project("a"), project("b")];
    let pid = projects[0].id;

    let mut urgent_open = task("urgent open", TaskStatus::InProgress, pid);
    urgent_open.priority = TaskPriority::Urgent;
    let mut urgent_done = task("urgent done", TaskStatus::Done, pid);
    urgent_done.priority = TaskPriority::Urgent;

    let tasks = vec![
        task("t1", TaskStatus::Todo, pid),
        task("t2", TaskStatus::Todo, pid),
        task("t3", TaskStatus::Review, pid),
        task("t4", TaskStatus::Done, pid),
        urgent_open,
        urgent_done,
    ];

    let stats = dashboard_stats(&projects, &tasks);
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.total_tasks, 6);
    assert_eq!(stats.status.todo, 2);
    assert_eq!(stats.status.in_progress, 1);
    assert_eq!(stats.status.review, 1);
    assert_eq!(stats.status.done, 2);
    // Done urgent tasks no longer count as open.
    assert_eq!(stats.urgent_open, 1);
}

#[test]
fn progress_is_zero_for_a_project_without_tasks() {
    let empty_project = project("empty");
    assert_eq!(project_progress(empty_project.id, &[]), 0);
}

#[test]
fn progress_floors_the_percentage() {
    let pid = Uuid::new_v4();
    let other = Uuid::new_v4();
    let tasks = vec![
        task("done", TaskStatus::Done, pid),
        task("open 1", TaskStatus::Todo, pid),
        task("open 2", TaskStatus::InProgress, pid),
        // Another project's tasks must not leak into the ratio.
        task("foreign done", TaskStatus::Done, other),
    ];

    // 1 of 3 done: floor(100/3) = 33, not the rounded 33.3.
    assert_eq!(project_progress(pid, &tasks), 33);
    assert_eq!(project_progress(other, &tasks), 100);
}

#[test]
fn upcoming_deadlines_sorts_open_due_tasks_ascending() {
    let pid = Uuid::new_v4();
    let mut may = task("may", TaskStatus::Todo, pid);
    may.due_date = Some(MAY_01);
    let mut mar = task("march", TaskStatus::InProgress, pid);
    mar.due_date = Some(MAR_10);
    let mut apr = task("april", TaskStatus::Review, pid);
    apr.due_date = Some(APR_20);
    let mut done = task("done with date", TaskStatus::Done, pid);
    done.due_date = Some(MAR_10);
    let undated = task("no date", TaskStatus::Todo, pid);

    let tasks = vec![may, mar, apr, done, undated];
    let upcoming = upcoming_deadlines(&tasks);

    let titles: Vec<_> = upcoming.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["march", "april", "may"]);
}

#[test]
fn upcoming_deadlines_caps_at_five_and_keeps_ties_stable() {
    let pid = Uuid::new_v4();
    let mut tasks = Vec::new();
    for n in 0..4i64 {
        let mut t = task(&format!("later {n}"), TaskStatus::Todo, pid);
        t.due_date = Some(MAY_01 + n);
        tasks.push(t);
    }
    for n in 0..3 {
        let mut t = task(&format!("tied {n}"), TaskStatus::Todo, pid);
        t.due_date = Some(MAR_10);
        tasks.push(t);
    }

    let upcoming = upcoming_deadlines(&tasks);
    assert_eq!(upcoming.len(), 5);

    let titles: Vec<_> = upcoming.iter().map(|t| t.title.as_str()).collect();
    // Equal due dates keep their original relative order ahead of later ones.
    assert_eq!(titles, ["tied 0", "tied 1", "tied 2", "later 0", "later 1"]);
}

#[test]
fn status_filter_alone_returns_the_done_subset_in_order() {
    let pid = Uuid::new_v4();
    let tasks = vec![
        task("a", TaskStatus::Done, pid),
        task("b", TaskStatus::Todo, pid),
        task("c", TaskStatus::Done, pid),
        task("d", TaskStatus::Review, pid),
    ];

    let filter = TaskFilter {
        status: Some(TaskStatus::Done),
        project: None,
    };
    let filtered = filter_tasks(&tasks, &filter);
    let titles: Vec<_> = filtered.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["a", "c"]);
}

#[test]
fn filters_combine_with_logical_and() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let tasks = vec![
        task("match", TaskStatus::Todo, first),
        task("wrong status", TaskStatus::Done, first),
        task("wrong project", TaskStatus::Todo, second),
    ];

    let filter = TaskFilter {
        status: Some(TaskStatus::Todo),
        project: Some(first),
    };
    let filtered = filter_tasks(&tasks, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "match");

    // The default filter means "all" on both axes.
    assert_eq!(filter_tasks(&tasks, &TaskFilter::default()).len(), 3);
}
