//! Repository layer: storage-access contracts and the generic SQLite
//! implementation shared by all four entities.
//!
//! # Responsibility
//! - Keep SQL details inside the persistence boundary.
//! - Acquire exactly one connection per operation and release it on every
//!   exit path.
//!
//! # Invariants
//! - Absent rows are `Ok(None)`, never an error.
//! - Zero rows matched on update/delete is `RepoError::NotFound`; the
//!   service layer collapses it to `false` for callers.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod account_repo;
pub mod contact_repo;
pub mod post_repo;
pub mod record;
pub mod task_repo;

/// Storage-assigned integer identity shared by every entity.
pub type RecordId = i64;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(RecordId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
