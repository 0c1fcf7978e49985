//! Repository port for task persistence and lookup.

use crate::task::domain::{OwnerId, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The repository stores records verbatim; ownership checks and field
/// validation are the service's responsibility. Implementations must
/// serialize writes to a single task (no torn reads or writes) and must
/// apply [`remove_all_for_owner`](TaskRepository::remove_all_for_owner)
/// atomically.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the owner's tasks, optionally restricted to one status.
    ///
    /// Ordering is insertion order and is stable within a call.
    async fn list_for_owner(
        &self,
        owner: OwnerId,
        status: Option<TaskStatus>,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist; removal of a missing task is always reported, never
    /// silently ignored.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Removes every task owned by `owner` in one atomic operation.
    ///
    /// Returns the number of removed tasks. Removing zero tasks is not
    /// an error; the cascade is invoked alongside account deletion and
    /// must succeed for owners with no tasks.
    async fn remove_all_for_owner(&self, owner: OwnerId) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
