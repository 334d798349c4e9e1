//! Contact-message use-case service.
//!
//! # Responsibility
//! - Enforce the non-blank email/body preconditions on save.
//!
//! Messages are immutable after creation; there is no update entry point.

use crate::db::ConnectionProvider;
use crate::model::contact::ContactMessage;
use crate::repo::contact_repo::ContactMessageRepository;
use crate::repo::{RecordId, RepoError};
use crate::service::is_blank;
use log::{error, warn};

/// Validation and orchestration layer for contact messages.
pub struct ContactMessageService<'p> {
    repo: ContactMessageRepository<'p>,
}

impl<'p> ContactMessageService<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self {
            repo: ContactMessageRepository::new(provider),
        }
    }

    /// Saves a message. A blank email or body declines the call without
    /// touching storage.
    pub fn save_message(&self, mut message: ContactMessage) -> Option<ContactMessage> {
        if is_blank(&message.email) || is_blank(&message.body) {
            warn!("event=contact_save module=service status=declined reason=blank_required_field");
            return None;
        }

        match self.repo.insert(&mut message) {
            Ok(_) => Some(message),
            Err(err) => {
                error!("event=contact_save module=service status=error error={err}");
                None
            }
        }
    }

    pub fn get_message(&self, id: RecordId) -> Option<ContactMessage> {
        match self.repo.get(id) {
            Ok(found) => found,
            Err(err) => {
                error!("event=contact_get module=service status=error id={id} error={err}");
                None
            }
        }
    }

    /// Lists messages most recent first.
    pub fn list_messages(&self) -> Vec<ContactMessage> {
        match self.repo.list() {
            Ok(messages) => messages,
            Err(err) => {
                error!("event=contact_list module=service status=error error={err}");
                Vec::new()
            }
        }
    }

    pub fn delete_message(&self, id: RecordId) -> bool {
        match self.repo.delete(id) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!("event=contact_delete module=service status=error id={id} error={err}");
                false
            }
        }
    }
}
