//! Embedded schema registry and executor.
//!
//! # Responsibility
//! - Register DDL batches in strictly increasing order.
//! - Apply pending batches atomically at provider construction.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied schema version is mirrored to `PRAGMA user_version`.
//! - The DDL itself guards re-runs with `CREATE TABLE IF NOT EXISTS`.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct SchemaBatch {
    version: u32,
    sql: &'static str,
}

const SCHEMA: &[SchemaBatch] = &[SchemaBatch {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA.last().map_or(0, |batch| batch.version)
}

/// Applies all pending schema batches on the provided connection.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for batch in SCHEMA {
        if batch.version <= current_version {
            continue;
        }

        tx.execute_batch(batch.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", batch.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
