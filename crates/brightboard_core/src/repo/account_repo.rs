//! Account persistence: [`Record`] implementation and credential lookup.
//!
//! # Invariants
//! - Listings never load the `secret` column.
//! - The email lookup does load it; credential checks outside this core
//!   depend on that.

use crate::model::account::Account;
use crate::repo::record::{Record, SqliteRepository};
use crate::repo::{RecordId, RepoResult};
use rusqlite::types::Value;
use rusqlite::Row;

/// Repository over `accounts`, ordered by name ascending.
pub type AccountRepository<'p> = SqliteRepository<'p, Account>;

impl Record for Account {
    const TABLE: &'static str = "accounts";

    const INSERT_SQL: &'static str = "INSERT INTO accounts \
        (name, email, secret, birth_date, gender, phone, role, created_at, updated_at) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

    const SELECT_SQL: &'static str = "SELECT id, name, email, secret, birth_date, gender, \
        phone, role, created_at, updated_at FROM accounts";

    const LIST_SQL: &'static str = "SELECT id, name, email, birth_date, gender, phone, role, \
        created_at, updated_at FROM accounts ORDER BY name ASC, id ASC";

    const UPDATE_SQL: &'static str = "UPDATE accounts SET name = ?1, email = ?2, secret = ?3, \
        birth_date = ?4, gender = ?5, phone = ?6, role = ?7, updated_at = ?8 WHERE id = ?9";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn stamp_created(&mut self, now_ms: i64) {
        self.created_at = now_ms;
        self.updated_at = now_ms;
    }

    fn stamp_updated(&mut self, now_ms: i64) {
        self.updated_at = now_ms;
    }

    fn bind_insert(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.email.clone()),
            Value::from(self.secret.clone()),
            Value::from(self.birth_date.clone()),
            Value::from(self.gender.clone()),
            Value::from(self.phone.clone()),
            Value::from(self.role.clone()),
            Value::from(self.created_at),
            Value::from(self.updated_at),
        ]
    }

    fn bind_update(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.email.clone()),
            Value::from(self.secret.clone()),
            Value::from(self.birth_date.clone()),
            Value::from(self.gender.clone()),
            Value::from(self.phone.clone()),
            Value::from(self.role.clone()),
            Value::from(self.updated_at),
            Value::from(self.id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            secret: row.get("secret")?,
            birth_date: row.get("birth_date")?,
            gender: row.get("gender")?,
            phone: row.get("phone")?,
            role: row.get("role")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn from_list_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            secret: None,
            birth_date: row.get("birth_date")?,
            gender: row.get("gender")?,
            phone: row.get("phone")?,
            role: row.get("role")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl SqliteRepository<'_, Account> {
    /// Looks an account up by email, secret included.
    pub fn get_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let sql = format!("{} WHERE email = ?1", Account::SELECT_SQL);
        self.query_one(&sql, vec![Value::from(email.to_owned())])
    }
}
