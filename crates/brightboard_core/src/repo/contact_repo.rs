//! Contact-message persistence: [`Record`] implementation.
//!
//! The service layer never exposes an update for this entity; the update
//! statement exists only to satisfy the uniform repository contract.

use crate::model::contact::ContactMessage;
use crate::repo::record::{Record, SqliteRepository};
use crate::repo::{RecordId, RepoResult};
use rusqlite::types::Value;
use rusqlite::Row;

/// Repository over `contact_messages`, ordered by creation time descending.
pub type ContactMessageRepository<'p> = SqliteRepository<'p, ContactMessage>;

impl Record for ContactMessage {
    const TABLE: &'static str = "contact_messages";

    const INSERT_SQL: &'static str = "INSERT INTO contact_messages \
        (name, email, phone, subject, body, created_at) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    const SELECT_SQL: &'static str = "SELECT id, name, email, phone, subject, body, \
        created_at FROM contact_messages";

    const LIST_SQL: &'static str = "SELECT id, name, email, phone, subject, body, \
        created_at FROM contact_messages ORDER BY created_at DESC, id DESC";

    const UPDATE_SQL: &'static str = "UPDATE contact_messages SET name = ?1, email = ?2, \
        phone = ?3, subject = ?4, body = ?5 WHERE id = ?6";

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
            Value::from(self.name.clone()),
            Value::from(self.email.clone()),
            Value::from(self.phone.clone()),
            Value::from(self.subject.clone()),
            Value::from(self.body.clone()),
            Value::from(self.created_at),
        ]
    }

    fn bind_update(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.email.clone()),
            Value::from(self.phone.clone()),
            Value::from(self.subject.clone()),
            Value::from(self.body.clone()),
            Value::from(self.id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            subject: row.get("subject")?,
            body: row.get("body")?,
            created_at: row.get("created_at")?,
        })
    }
}
