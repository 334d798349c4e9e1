//! Contact-message domain model.

use serde::{Deserialize, Serialize};

/// Message submitted through the public contact form.
///
/// Immutable after creation except deletion; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Storage-assigned row id; `0` until the first insert.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub body: String,
    /// Unix epoch milliseconds, stamped by the repository at insert.
    pub created_at: i64,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            subject: subject.into(),
            body: body.into(),
            created_at: 0,
        }
    }
}
