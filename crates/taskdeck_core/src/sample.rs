//! Bundled demo content used to seed empty stores on first run.
//!
//! # Invariants
//! - Ids and timestamps are fixed so seeding is reproducible and the task
//!   set links to the project set even though each collection seeds
//!   independently.

use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::EntityId;
use uuid::Uuid;

/// Color swatches offered by the project editor; `Project::color` accepts
/// any display token, these are just the defaults.
pub const PRESET_COLORS: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

const PROJECT_WEBSITE: EntityId = Uuid::from_u128(0x5eed_0001);
const PROJECT_MOBILE: EntityId = Uuid::from_u128(0x5eed_0002);
const PROJECT_LAUNCH: EntityId = Uuid::from_u128(0x5eed_0003);

const TASK_BASE: u128 = 0x5eed_1000;
const MEMBER_BASE: u128 = 0x5eed_2000;

/// 2025-01-01T00:00:00Z; all sample records pretend to be created then.
const SEEDED_AT: i64 = 1_735_689_600_000;
const DAY_MS: i64 = 86_400_000;

/// The demo project set.
pub fn sample_projects() -> Vec<Project> {
    let project = |id: EntityId, name: &str, description: &str, color: &str| Project {
        id,
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        created_at: SEEDED_AT,
        updated_at: SEEDED_AT,
    };

    vec![
        project(
            PROJECT_WEBSITE,
            "Website Redesign",
            "Refresh the marketing site with the new brand.",
            PRESET_COLORS[0],
        ),
        project(
            PROJECT_MOBILE,
            "Mobile App",
            "Companion app for iOS and Android.",
            PRESET_COLORS[1],
        ),
        project(
            PROJECT_LAUNCH,
            "Q1 Launch",
            "Everything needed for the spring launch.",
            PRESET_COLORS[2],
        ),
    ]
}

/// The demo task set; `project_id` values reference [`sample_projects`].
pub fn sample_tasks() -> Vec<Task> {
    struct Seed {
        title: &'static str,
        status: TaskStatus,
        priority: TaskPriority,
        assignee: Option<&'static str>,
        due_in_days: Option<i64>,
        project_id: EntityId,
    }

    let seeds = [
        Seed {
            title: "Draft homepage wireframes",
            status: TaskStatus::Done,
            priority: TaskPriority::High,
            assignee: Some("Sarah Chen"),
            due_in_days: Some(7),
            project_id: PROJECT_WEBSITE,
        },
        Seed {
            title: "Build component library",
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            assignee: Some("Marcus Webb"),
            due_in_days: Some(14),
            project_id: PROJECT_WEBSITE,
        },
        Seed {
            title: "Migrate blog content",
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            assignee: None,
            due_in_days: None,
            project_id: PROJECT_WEBSITE,
        },
        Seed {
            title: "Set up CI for app builds",
            status: TaskStatus::Review,
            priority: TaskPriority::Medium,
            assignee: Some("Priya Patel"),
            due_in_days: Some(10),
            project_id: PROJECT_MOBILE,
        },
        Seed {
            title: "Push notification service",
            status: TaskStatus::InProgress,
            priority: TaskPriority::Urgent,
            assignee: Some("Marcus Webb"),
            due_in_days: Some(3),
            project_id: PROJECT_MOBILE,
        },
        Seed {
            title: "Offline mode spike",
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            assignee: None,
            due_in_days: Some(21),
            project_id: PROJECT_MOBILE,
        },
        Seed {
            title: "Write launch announcement",
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignee: Some("Dana Ortiz"),
            due_in_days: Some(30),
            project_id: PROJECT_LAUNCH,
        },
        Seed {
            title: "Book press briefings",
            status: TaskStatus::Done,
            priority: TaskPriority::Urgent,
            assignee: Some("Dana Ortiz"),
            due_in_days: Some(5),
            project_id: PROJECT_LAUNCH,
        },
    ];

    seeds
        .into_iter()
        .enumerate()
        .map(|(index, seed)| Task {
            id: Uuid::from_u128(TASK_BASE + index as u128),
            title: seed.title.to_string(),
            description: String::new(),
            status: seed.status,
            priority: seed.priority,
            assignee: seed.assignee.map(str::to_string),
            due_date: seed.due_in_days.map(|days| SEEDED_AT + days * DAY_MS),
            project_id: seed.project_id,
            created_at: SEEDED_AT,
            updated_at: SEEDED_AT,
        })
        .collect()
}

/// The demo team-member set.
pub fn sample_team_members() -> Vec<TeamMember> {
    let seeds = [
        ("Sarah Chen", "Product Designer"),
        ("Marcus Webb", "Engineer"),
        ("Priya Patel", "Engineer"),
        ("Dana Ortiz", "Marketing Lead"),
    ];

    seeds
        .into_iter()
        .enumerate()
        .map(|(index, (name, role))| TeamMember {
            id: Uuid::from_u128(MEMBER_BASE + index as u128),
            name: name.to_string(),
            role: role.to_string(),
        })
        .collect()
}
