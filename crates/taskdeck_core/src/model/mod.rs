//! Domain model for project, task and team-member records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Own identifier generation and the single clock helper.
//!
//! # Invariants
//! - Every record is identified by a stable `EntityId` that is never reused.
//! - Timestamps are Unix epoch milliseconds.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub mod member;
pub mod project;
pub mod task;

/// Stable identifier for every domain record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are random v4 UUIDs, so two records never share an id even when
/// created within the same clock tick or in different collections.
pub type EntityId = Uuid;

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Clamps to 0 if the system clock reports a pre-epoch time instead of
/// propagating an error no caller could act on.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
