//! Task use-case service.
//!
//! # Responsibility
//! - Enforce the non-blank title precondition on create.
//! - Default omitted status/priority before insert.

use crate::db::ConnectionProvider;
use crate::model::task::{Task, PRIORITY_MEDIUM, STATUS_PENDING};
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RecordId, RepoError};
use crate::service::is_blank;
use log::{error, warn};

/// Validation and orchestration layer for tasks.
pub struct TaskService<'p> {
    repo: TaskRepository<'p>,
}

impl<'p> TaskService<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self {
            repo: TaskRepository::new(provider),
        }
    }

    /// Creates a task. A blank title declines the call without touching
    /// storage; blank status/priority default to `PENDING`/`MEDIUM`.
    pub fn create_task(&self, mut task: Task) -> Option<Task> {
        if is_blank(&task.title) {
            warn!("event=task_create module=service status=declined reason=blank_title");
            return None;
        }

        if is_blank(&task.status) {
            task.status = STATUS_PENDING.to_string();
        }
        if is_blank(&task.priority) {
            task.priority = PRIORITY_MEDIUM.to_string();
        }

        match self.repo.insert(&mut task) {
            Ok(_) => Some(task),
            Err(err) => {
                error!("event=task_create module=service status=error error={err}");
                None
            }
        }
    }

    pub fn get_task(&self, id: RecordId) -> Option<Task> {
        match self.repo.get(id) {
            Ok(found) => found,
            Err(err) => {
                error!("event=task_get module=service status=error id={id} error={err}");
                None
            }
        }
    }

    /// Lists tasks most recent first.
    pub fn list_tasks(&self) -> Vec<Task> {
        match self.repo.list() {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("event=task_list module=service status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Updates a task. Requires a storage-assigned id. `completed_at` is
    /// persisted exactly as carried by the record, including `None`.
    pub fn update_task(&self, task: &mut Task) -> bool {
        if task.id <= 0 {
            warn!("event=task_update module=service status=declined reason=missing_id");
            return false;
        }

        match self.repo.update(task) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!(
                    "event=task_update module=service status=error id={} error={err}",
                    task.id
                );
                false
            }
        }
    }

    pub fn delete_task(&self, id: RecordId) -> bool {
        match self.repo.delete(id) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!("event=task_delete module=service status=error id={id} error={err}");
                false
            }
        }
    }
}
