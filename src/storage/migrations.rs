//! Schema for the questchat key-value database.
//!
//! `PRAGMA user_version` holds the number of applied steps. Opening the
//! database applies whatever steps are missing, each in its own transaction.

use rusqlite::Connection;

use crate::error::QuestError;

/// SQL for each schema step; step `n` brings the schema to version `n + 1`.
const STEPS: &[&str] = &[
    // v1: one row per key, each holding a whole serialized value
    r"
    CREATE TABLE IF NOT EXISTS kv_store (
        key TEXT PRIMARY KEY,
        value BLOB NOT NULL,
        updated_at TEXT NOT NULL
    );
    ",
];

/// Version the schema reaches once every step has run.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const LATEST: i32 = STEPS.len() as i32;

/// Read `PRAGMA user_version`; a fresh database reports 0.
pub fn get_version(conn: &Connection) -> Result<i32, QuestError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| QuestError::Database(format!("Failed to read schema version: {e}")))
}

/// Bring the schema up to date.
pub fn run(conn: &Connection) -> Result<(), QuestError> {
    let from = get_version(conn)?;
    if from > LATEST {
        return Err(QuestError::Database(format!(
            "database schema v{from} is newer than this build (v{LATEST})"
        )));
    }

    for (version, sql) in (1..).zip(STEPS).skip_while(|(v, _)| *v <= from) {
        log::info!("upgrading kv schema to v{version}");

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .map_err(|e| QuestError::Database(format!("Schema step v{version} failed: {e}")))?;
        tx.execute_batch(&format!("PRAGMA user_version = {version};"))?;
        tx.commit()?;
    }

    Ok(())
}
