//! Entity stores: in-memory collections with write-through persistence.
//!
//! # Responsibility
//! - Own the ordered in-memory collection per entity kind.
//! - Apply mutations in memory first, then re-persist the full collection.
//!
//! # Invariants
//! - Mutations are optimistic: a failed save leaves memory updated and
//!   surfaces the error to the caller instead of rolling back.
//! - Unknown-id updates and deletes are silent no-ops, not errors.
//! - Deleting a project never cascades into the task collection.

pub mod entity_store;
pub mod member_store;
pub mod project_store;
pub mod task_store;

pub use entity_store::{Entity, EntityStore};
pub use member_store::TeamMemberStore;
pub use project_store::ProjectStore;
pub use task_store::TaskStore;
