//! Generic record contract and SQLite repository.
//!
//! # Responsibility
//! - Collapse the per-entity CRUD boilerplate into one implementation
//!   parameterized over table SQL and row mapping.
//!
//! # Invariants
//! - Every operation acquires one fresh connection and performs one
//!   statement; the connection's `Drop` is the release and runs on all exit
//!   paths, including statement errors.
//! - Generated keys are read from the same connection that executed the
//!   insert.
//! - Timestamp columns are stamped with current time at the call site, never
//!   supplied by callers.

use crate::db::ConnectionProvider;
use crate::repo::{RecordId, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Row};
use std::marker::PhantomData;
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-entity persistence contract consumed by [`SqliteRepository`].
///
/// Implementations provide the SQL text and positional bind order for their
/// table; all column lists are bound positionally and must agree between the
/// SQL constants and the `bind_*` vectors.
pub trait Record: Sized {
    /// Table name; also used for the delete statement.
    const TABLE: &'static str;
    /// Parameterized insert binding every mutable column.
    const INSERT_SQL: &'static str;
    /// Full-row select without a `WHERE` clause.
    const SELECT_SQL: &'static str;
    /// Listing select with the entity-specific ordering baked in.
    const LIST_SQL: &'static str;
    /// Update overwriting all mutable columns except id and creation
    /// timestamp; the id is bound as the final parameter.
    const UPDATE_SQL: &'static str;

    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);

    /// Stamps storage-assigned creation metadata before insert binding.
    fn stamp_created(&mut self, now_ms: i64);

    /// Refreshes the update timestamp; default no-op for entities without
    /// one.
    fn stamp_updated(&mut self, _now_ms: i64) {}

    fn bind_insert(&self) -> Vec<Value>;
    fn bind_update(&self) -> Vec<Value>;

    fn from_row(row: &Row<'_>) -> RepoResult<Self>;

    /// Listing projection; defaults to the full row mapping. Entities that
    /// omit columns from listings override this.
    fn from_list_row(row: &Row<'_>) -> RepoResult<Self> {
        Self::from_row(row)
    }
}

/// SQLite repository instantiated per entity through [`Record`].
pub struct SqliteRepository<'p, R: Record> {
    provider: &'p ConnectionProvider,
    _record: PhantomData<R>,
}

impl<'p, R: Record> SqliteRepository<'p, R> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self {
            provider,
            _record: PhantomData,
        }
    }

    /// Inserts the record and writes the generated key and creation
    /// timestamps back into it.
    pub fn insert(&self, record: &mut R) -> RepoResult<RecordId> {
        let conn = self.provider.acquire()?;
        record.stamp_created(now_epoch_ms());
        conn.execute(R::INSERT_SQL, params_from_iter(record.bind_insert()))?;
        let id = conn.last_insert_rowid();
        record.set_id(id);
        Ok(id)
    }

    /// Gets one record by id. A missing row is a normal outcome, not an
    /// error.
    pub fn get(&self, id: RecordId) -> RepoResult<Option<R>> {
        let conn = self.provider.acquire()?;
        let sql = format!("{} WHERE id = ?1", R::SELECT_SQL);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(R::from_row(row)?));
        }
        Ok(None)
    }

    /// Lists all records in the entity's canonical ordering.
    pub fn list(&self) -> RepoResult<Vec<R>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(R::LIST_SQL)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(R::from_list_row(row)?);
        }
        Ok(records)
    }

    /// Overwrites every mutable column except id and creation timestamp;
    /// refreshes the record's update timestamp where the entity has one.
    pub fn update(&self, record: &mut R) -> RepoResult<()> {
        let conn = self.provider.acquire()?;
        record.stamp_updated(now_epoch_ms());
        let changed = conn.execute(R::UPDATE_SQL, params_from_iter(record.bind_update()))?;
        if changed == 0 {
            return Err(RepoError::NotFound(record.id()));
        }
        Ok(())
    }

    pub fn delete(&self, id: RecordId) -> RepoResult<()> {
        let conn = self.provider.acquire()?;
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        let changed = conn.execute(&sql, [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    /// Runs an entity-specific query returning at most one full row.
    pub(crate) fn query_one(&self, sql: &str, binds: Vec<Value>) -> RepoResult<Option<R>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(binds))?;
        if let Some(row) = rows.next()? {
            return Ok(Some(R::from_row(row)?));
        }
        Ok(None)
    }

    /// Runs an entity-specific query returning full rows.
    pub(crate) fn query_many(&self, sql: &str, binds: Vec<Value>) -> RepoResult<Vec<R>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(binds))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(R::from_row(row)?);
        }
        Ok(records)
    }
}

/// Unix epoch milliseconds at the call site.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
