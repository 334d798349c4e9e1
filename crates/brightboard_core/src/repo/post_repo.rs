//! Post persistence: [`Record`] implementation and author lookup.
//!
//! # Invariants
//! - Listings are most-recent-first, ties broken by id so insertion order is
//!   deterministic within one millisecond.
//! - `author_id` is written once at insert and never rewritten by update.

use crate::model::post::Post;
use crate::repo::record::{Record, SqliteRepository};
use crate::repo::{RecordId, RepoResult};
use rusqlite::types::Value;
use rusqlite::Row;

/// Repository over `posts`, ordered by creation time descending.
pub type PostRepository<'p> = SqliteRepository<'p, Post>;

impl Record for Post {
    const TABLE: &'static str = "posts";

    const INSERT_SQL: &'static str = "INSERT INTO posts \
        (title, body, author_id, image_url, created_at, updated_at) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    const SELECT_SQL: &'static str = "SELECT id, title, body, author_id, image_url, \
        created_at, updated_at FROM posts";

    const LIST_SQL: &'static str = "SELECT id, title, body, author_id, image_url, \
        created_at, updated_at FROM posts ORDER BY created_at DESC, id DESC";

    const UPDATE_SQL: &'static str = "UPDATE posts SET title = ?1, body = ?2, \
        image_url = ?3, updated_at = ?4 WHERE id = ?5";

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
            Value::from(self.title.clone()),
            Value::from(self.body.clone()),
            Value::from(self.author_id),
            Value::from(self.image_url.clone()),
            Value::from(self.created_at),
            Value::from(self.updated_at),
        ]
    }

    fn bind_update(&self) -> Vec<Value> {
        vec![
            Value::from(self.title.clone()),
            Value::from(self.body.clone()),
            Value::from(self.image_url.clone()),
            Value::from(self.updated_at),
            Value::from(self.id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            body: row.get("body")?,
            author_id: row.get("author_id")?,
            image_url: row.get("image_url")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl SqliteRepository<'_, Post> {
    /// Lists all posts by one author, most recent first.
    pub fn list_by_author(&self, author_id: RecordId) -> RepoResult<Vec<Post>> {
        let sql = format!(
            "{} WHERE author_id = ?1 ORDER BY created_at DESC, id DESC",
            Post::SELECT_SQL
        );
        self.query_many(&sql, vec![Value::from(author_id)])
    }
}
