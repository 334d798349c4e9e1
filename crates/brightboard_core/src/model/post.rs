//! Post domain model.

use serde::{Deserialize, Serialize};

/// Published post record.
///
/// `author_id` references an account id but is not enforced in code; deleting
/// an account leaves its posts untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Storage-assigned row id; `0` until the first insert.
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    /// Populated by the image-generation collaborator at creation time.
    pub image_url: String,
    /// Unix epoch milliseconds, stamped by the repository at insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed by every update.
    pub updated_at: i64,
}

impl Post {
    /// Creates a post awaiting its first insert. `image_url` is filled in by
    /// the post service before the insert happens.
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            body: body.into(),
            author_id,
            image_url: String::new(),
            created_at: 0,
            updated_at: 0,
        }
    }
}
