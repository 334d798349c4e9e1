//! Account use-case service.
//!
//! # Responsibility
//! - Enforce the non-blank email precondition on create.
//! - Delegate persistence to the account repository.

use crate::db::ConnectionProvider;
use crate::model::account::Account;
use crate::repo::account_repo::AccountRepository;
use crate::repo::{RecordId, RepoError};
use crate::service::is_blank;
use log::{error, warn};

/// Validation and orchestration layer for accounts.
pub struct AccountService<'p> {
    repo: AccountRepository<'p>,
}

impl<'p> AccountService<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self {
            repo: AccountRepository::new(provider),
        }
    }

    /// Creates an account. A blank email declines the call without touching
    /// storage; the created record comes back with id and timestamps set.
    pub fn create_account(&self, mut account: Account) -> Option<Account> {
        if is_blank(&account.email) {
            warn!("event=account_create module=service status=declined reason=blank_email");
            return None;
        }

        match self.repo.insert(&mut account) {
            Ok(_) => Some(account),
            Err(err) => {
                error!("event=account_create module=service status=error error={err}");
                None
            }
        }
    }

    pub fn get_account(&self, id: RecordId) -> Option<Account> {
        match self.repo.get(id) {
            Ok(found) => found,
            Err(err) => {
                error!("event=account_get module=service status=error id={id} error={err}");
                None
            }
        }
    }

    /// Email lookup for credential checks; unlike listings, the result
    /// includes the secret.
    pub fn get_account_by_email(&self, email: &str) -> Option<Account> {
        match self.repo.get_by_email(email) {
            Ok(found) => found,
            Err(err) => {
                error!("event=account_get_by_email module=service status=error error={err}");
                None
            }
        }
    }

    /// Lists accounts by name ascending, secrets omitted.
    pub fn list_accounts(&self) -> Vec<Account> {
        match self.repo.list() {
            Ok(accounts) => accounts,
            Err(err) => {
                error!("event=account_list module=service status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Updates an account. Requires a storage-assigned id; refreshes the
    /// record's `updated_at` on success.
    pub fn update_account(&self, account: &mut Account) -> bool {
        if account.id <= 0 {
            warn!("event=account_update module=service status=declined reason=missing_id");
            return false;
        }

        match self.repo.update(account) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!(
                    "event=account_update module=service status=error id={} error={err}",
                    account.id
                );
                false
            }
        }
    }

    pub fn delete_account(&self, id: RecordId) -> bool {
        match self.repo.delete(id) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!("event=account_delete module=service status=error id={id} error={err}");
                false
            }
        }
    }
}
