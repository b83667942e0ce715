//! Collection persistence adapter.
//!
//! # Responsibility
//! - Define the injectable key-value backend contract used by entity stores.
//! - Serialize whole collections to and from JSON payloads.
//!
//! # Invariants
//! - A missing collection key loads as an empty sequence, never an error.
//! - Saves are full-replace writes; there is no merge or partial patch.
//! - Save and decode failures surface to the caller instead of being
//!   swallowed.

use crate::db::DbError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for collection load/save operations.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying database transport failure.
    Db(DbError),
    /// A collection payload could not be serialized.
    Encode {
        collection: String,
        source: serde_json::Error,
    },
    /// A stored payload is not a valid collection of the expected shape.
    Decode {
        collection: String,
        source: serde_json::Error,
    },
    /// The storage medium rejected the operation (capacity, access, ...).
    Backend {
        collection: String,
        message: String,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { collection, source } => {
                write!(f, "failed to encode collection `{collection}`: {source}")
            }
            Self::Decode { collection, source } => {
                write!(f, "invalid stored payload for `{collection}`: {source}")
            }
            Self::Backend {
                collection,
                message,
            } => write!(f, "storage rejected write to `{collection}`: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Backend { .. } => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Injectable key-value backend for named collections.
///
/// Entity stores receive an implementation at construction instead of
/// addressing a process-wide key space, so independent instances (tests,
/// embeddings) cannot interfere with each other.
pub trait CollectionStorage {
    /// Returns the stored payload for `collection`, or `None` when the key
    /// has never been written.
    fn load_payload(&self, collection: &str) -> StorageResult<Option<String>>;

    /// Replaces the stored payload for `collection` in full.
    fn save_payload(&self, collection: &str, payload: &str) -> StorageResult<()>;
}

impl<S: CollectionStorage + ?Sized> CollectionStorage for &S {
    fn load_payload(&self, collection: &str) -> StorageResult<Option<String>> {
        (**self).load_payload(collection)
    }

    fn save_payload(&self, collection: &str, payload: &str) -> StorageResult<()> {
        (**self).save_payload(collection, payload)
    }
}

/// Loads and decodes a whole collection; a missing key is an empty sequence.
pub fn load_collection<T, S>(storage: &S, collection: &str) -> StorageResult<Vec<T>>
where
    T: DeserializeOwned,
    S: CollectionStorage + ?Sized,
{
    match storage.load_payload(collection)? {
        Some(payload) => {
            serde_json::from_str(&payload).map_err(|source| StorageError::Decode {
                collection: collection.to_string(),
                source,
            })
        }
        None => Ok(Vec::new()),
    }
}

/// Encodes and stores a whole collection as one full-replace write.
pub fn save_collection<T, S>(storage: &S, collection: &str, records: &[T]) -> StorageResult<()>
where
    T: Serialize,
    S: CollectionStorage + ?Sized,
{
    let payload = serde_json::to_string(records).map_err(|source| StorageError::Encode {
        collection: collection.to_string(),
        source,
    })?;
    storage.save_payload(collection, &payload)
}
