//! Task persistence: [`Record`] implementation.
//!
//! # Invariants
//! - `completed_at` is written exactly as supplied on update, including
//!   `None`; there is no auto-stamping.
//! - `owner_id` is written once at insert and never rewritten by update.

use crate::model::task::Task;
use crate::repo::record::{Record, SqliteRepository};
use crate::repo::{RecordId, RepoResult};
use rusqlite::types::Value;
use rusqlite::Row;

/// Repository over `tasks`, ordered by creation time descending.
pub type TaskRepository<'p> = SqliteRepository<'p, Task>;

impl Record for Task {
    const TABLE: &'static str = "tasks";

    const INSERT_SQL: &'static str = "INSERT INTO tasks \
        (title, description, status, priority, owner_id, created_at) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    const SELECT_SQL: &'static str = "SELECT id, title, description, created_at, \
        completed_at, status, priority, owner_id FROM tasks";

    const LIST_SQL: &'static str = "SELECT id, title, description, created_at, \
        completed_at, status, priority, owner_id FROM tasks \
        ORDER BY created_at DESC, id DESC";

    const UPDATE_SQL: &'static str = "UPDATE tasks SET title = ?1, description = ?2, \
        completed_at = ?3, status = ?4, priority = ?5 WHERE id = ?6";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn stamp_created(&mut self, now_ms: i64) {
        self.created_at = now_ms;
    }

    fn bind_insert(&self) -> Vec<Value> {
        vec![
            Value::from(self.title.clone()),
            Value::from(self.description.clone()),
            Value::from(self.status.clone()),
            Value::from(self.priority.clone()),
            Value::from(self.owner_id),
            Value::from(self.created_at),
        ]
    }

    fn bind_update(&self) -> Vec<Value> {
        vec![
            Value::from(self.title.clone()),
            Value::from(self.description.clone()),
            Value::from(self.completed_at),
            Value::from(self.status.clone()),
            Value::from(self.priority.clone()),
            Value::from(self.id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            created_at: row.get("created_at")?,
            completed_at: row.get("completed_at")?,
            status: row.get("status")?,
            priority: row.get("priority")?,
            owner_id: row.get("owner_id")?,
        })
    }
}
