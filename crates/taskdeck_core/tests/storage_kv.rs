use rusqlite::Connection;
use taskdeck_core::db::migrations::latest_version;
use taskdeck_core::db::{open_db, open_db_in_memory, DbError};
use taskdeck_core::storage::{load_collection, save_collection, CollectionStorage};
use taskdeck_core::{Project, SqliteStorage, StorageError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "collections");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskdeck.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "collections");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_collection_loads_as_empty_not_error() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    assert!(storage.load_payload("never_written").unwrap().is_none());

    let projects: Vec<Project> = load_collection(&storage, "never_written").unwrap();
    assert!(projects.is_empty());
}

#[test]
fn save_is_a_full_replace_write() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    storage.save_payload("pm_projects", "[1,2,3]").unwrap();
    storage.save_payload("pm_projects", "[9]").unwrap();

    assert_eq!(
        storage.load_payload("pm_projects").unwrap().as_deref(),
        Some("[9]")
    );
}

#[test]
fn collections_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskdeck.db");

    {
        let conn = open_db(&path).unwrap();
        let storage = SqliteStorage::new(&conn);
        let projects = vec![Project::new(taskdeck_core::NewProject {
            name: "Persisted".to_string(),
            description: String::new(),
            color: "#3b82f6".to_string(),
        })];
        save_collection(&storage, "pm_projects", &projects).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let storage = SqliteStorage::new(&conn);
    let loaded: Vec<Project> = load_collection(&storage, "pm_projects").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Persisted");
}

#[test]
fn corrupt_payload_surfaces_as_decode_error() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    storage.save_payload("pm_projects", "not json at all").unwrap();

    let err = load_collection::<Project, _>(&storage, "pm_projects").unwrap_err();
    assert!(matches!(err, StorageError::Decode { ref collection, .. } if collection == "pm_projects"));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
