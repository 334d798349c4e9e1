//! SQLite storage bootstrap and connection lifecycle.
//!
//! # Responsibility
//! - Hand out short-lived connections for per-operation repository use.
//! - Apply the embedded schema before any repository call is permitted.
//!
//! # Invariants
//! - Applied schema version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before the schema
//!   bootstrap succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod provider;
pub mod schema;

pub use provider::ConnectionProvider;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
