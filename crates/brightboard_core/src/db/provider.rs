//! Per-operation connection provider.
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases and bootstrap their schema.
//! - Hand out one fresh, configured connection per repository operation.
//!
//! # Invariants
//! - `acquire` never reuses a connection; release is the connection's `Drop`,
//!   which runs on every exit path including statement errors.
//! - The schema is fully applied before `open`/`in_memory` return.

use super::schema::apply_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use uuid::Uuid;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
enum Source {
    File(PathBuf),
    /// Shared-cache in-memory database addressed by URI.
    Memory(String),
}

/// Hands out short-lived connections to a single logical database.
///
/// The provider owns the database location, never a live per-operation
/// connection, so one instance can serve concurrent repository calls.
#[derive(Debug)]
pub struct ConnectionProvider {
    source: Source,
    /// Keeps a shared-cache in-memory database alive between operations.
    _keeper: Option<Connection>,
}

impl ConnectionProvider {
    /// Opens a file-backed database and applies the schema bootstrap.
    ///
    /// # Side effects
    /// - Runs the schema batch on a dedicated bootstrap connection.
    /// - Emits `db_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=db status=start mode=file");

        let provider = Self {
            source: Source::File(path.as_ref().to_path_buf()),
            _keeper: None,
        };

        match provider.bootstrap() {
            Ok(()) => {
                info!(
                    "event=db_open module=db status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(provider)
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens a named in-memory database and applies the schema bootstrap.
    ///
    /// Each call creates an isolated database; the provider holds a keeper
    /// connection so the contents outlive the per-operation connections.
    pub fn in_memory() -> DbResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=db status=start mode=memory");

        let uri = format!(
            "file:brightboard-{}?mode=memory&cache=shared",
            Uuid::new_v4()
        );
        let keeper = match Connection::open(&uri) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let provider = Self {
            source: Source::Memory(uri),
            _keeper: Some(keeper),
        };

        match provider.bootstrap() {
            Ok(()) => {
                info!(
                    "event=db_open module=db status=ok mode=memory duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(provider)
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens one fresh connection for a single repository operation.
    ///
    /// The caller scopes the connection to the operation; dropping it is the
    /// release and is idempotent by construction.
    pub fn acquire(&self) -> DbResult<Connection> {
        let conn = match self.connect() {
            Ok(conn) => conn,
            Err(err) => {
                error!("event=db_acquire module=db status=error error={err}");
                return Err(err);
            }
        };
        configure(&conn)?;
        Ok(conn)
    }

    fn connect(&self) -> DbResult<Connection> {
        let conn = match &self.source {
            Source::File(path) => Connection::open(path)?,
            // Default open flags include SQLITE_OPEN_URI.
            Source::Memory(uri) => Connection::open(uri)?,
        };
        Ok(conn)
    }

    /// Applies the schema on a fresh connection distinct from per-operation
    /// ones. Runs before the provider is handed to any repository.
    fn bootstrap(&self) -> DbResult<()> {
        let mut conn = self.connect()?;
        configure(&conn)?;
        apply_schema(&mut conn)?;
        Ok(())
    }
}

fn configure(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}
