//! SQLite-backed collection storage.
//!
//! # Responsibility
//! - Map the `CollectionStorage` contract onto the `collections` table.
//!
//! # Invariants
//! - One row per collection name; writes replace the row wholesale.
//! - Reads of unknown names return `None` without error.

use crate::model::now_epoch_ms;
use crate::storage::{CollectionStorage, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Collection storage over a migrated SQLite connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection produced by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CollectionStorage for SqliteStorage<'_> {
    fn load_payload(&self, collection: &str) -> StorageResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM collections WHERE name = ?1;",
                [collection],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn save_payload(&self, collection: &str, payload: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO collections (name, payload, saved_at)
             VALUES (?1, ?2, ?3);",
            params![collection, payload, now_epoch_ms()],
        )?;
        Ok(())
    }
}
