//! Task domain model.

use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const STATUS_DONE: &str = "DONE";

pub const PRIORITY_LOW: &str = "LOW";
pub const PRIORITY_MEDIUM: &str = "MEDIUM";
pub const PRIORITY_HIGH: &str = "HIGH";

/// Actionable task record.
///
/// `status` and `priority` are free-form strings set by the caller; the
/// constants above are the conventional values and the service-layer
/// defaults, not an enforced transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Storage-assigned row id; `0` until the first insert.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Unix epoch milliseconds, stamped by the repository at insert.
    pub created_at: i64,
    /// Written exactly as supplied by the caller on update, including `None`.
    /// Never auto-stamped.
    pub completed_at: Option<i64>,
    /// Blank means "caller omitted it"; the service defaults it to
    /// [`STATUS_PENDING`] on create.
    pub status: String,
    /// Blank means "caller omitted it"; the service defaults it to
    /// [`PRIORITY_MEDIUM`] on create.
    pub priority: String,
    pub owner_id: i64,
}

impl Task {
    /// Creates a task awaiting its first insert, with status and priority
    /// left for the service to default.
    pub fn new(title: impl Into<String>, description: impl Into<String>, owner_id: i64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            created_at: 0,
            completed_at: None,
            status: String::new(),
            priority: String::new(),
            owner_id,
        }
    }
}
