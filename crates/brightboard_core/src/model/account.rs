//! Account domain model.

use serde::{Deserialize, Serialize};

/// Role value for regular members.
pub const ROLE_USER: &str = "USER";
/// Role value for administrators.
pub const ROLE_ADMIN: &str = "ADMIN";

/// Registered account record.
///
/// `role` is intentionally a free-form string; `USER` and `ADMIN` are the
/// conventional values, not an enforced enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Storage-assigned row id; `0` until the first insert.
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Credential value. Listings load this as `None`; only the email lookup
    /// used for credential checks outside this core includes it.
    pub secret: Option<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    /// Unix epoch milliseconds, stamped by the repository at insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed by every update.
    pub updated_at: i64,
}

impl Account {
    /// Creates an account awaiting its first insert.
    ///
    /// Optional profile fields start as `None`; id and timestamps stay `0`
    /// until storage assigns them.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            secret: Some(secret.into()),
            birth_date: None,
            gender: None,
            phone: None,
            role: role.into(),
            created_at: 0,
            updated_at: 0,
        }
    }
}
