//! Core domain logic for the brightboard backend.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod image;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{ConnectionProvider, DbError};
pub use image::{ImageClient, ImageGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::Account;
pub use model::contact::ContactMessage;
pub use model::post::Post;
pub use model::task::Task;
pub use repo::account_repo::AccountRepository;
pub use repo::contact_repo::ContactMessageRepository;
pub use repo::post_repo::PostRepository;
pub use repo::record::{Record, SqliteRepository};
pub use repo::task_repo::TaskRepository;
pub use repo::{RecordId, RepoError, RepoResult};
pub use service::account_service::AccountService;
pub use service::contact_service::ContactMessageService;
pub use service::post_service::PostService;
pub use service::task_service::TaskService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
