//! Service layer enforcing validation and ownership over the task store.

use crate::task::{
    domain::{NewTaskData, OwnerId, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
///
/// Carries raw client input; validation happens in the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status wire value; defaults to `pending`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for partially updating a task.
///
/// Fields left unset are not touched. `description` and `due_date` can
/// also be explicitly cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    status: Option<String>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            status: None,
            due_date: None,
        }
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clearing_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets a new status wire value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clearing_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = self.description {
            patch = match description {
                Some(text) => patch.with_description(text),
                None => patch.clearing_description(),
            };
        }
        if let Some(status) = self.status {
            patch = patch.with_status(TaskStatus::try_from(status.as_str())?);
        }
        if let Some(due_date) = self.due_date {
            patch = match due_date {
                Some(date) => patch.with_due_date(date),
                None => patch.clearing_due_date(),
            };
        }
        if patch.is_empty() {
            return Err(TaskDomainError::EmptyUpdate);
        }
        Ok(patch)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task with this identifier is visible to the caller.
    ///
    /// Covers both genuinely missing tasks and tasks owned by someone
    /// else; the two are merged so the service never leaks the existence
    /// of another user's tasks.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Authoritative task service.
///
/// Every operation takes the authenticated caller's identity, established
/// externally, and scopes visibility to tasks that caller owns.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// Manual impl: cloning shares the repository and clock, so `R: Clone`
// and `C: Clone` must not be required.
impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is empty or
    /// the status is outside the enum, or [`TaskServiceError::Repository`]
    /// when persistence fails. Nothing is persisted on validation failure.
    pub async fn create(
        &self,
        owner: OwnerId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let status = request
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(TaskDomainError::from)?
            .unwrap_or_default();

        let task = Task::new(
            owner,
            NewTaskData {
                title,
                description: request.description,
                status,
                due_date: request.due_date,
            },
            &*self.clock,
        );
        self.repository.insert(&task).await?;
        info!(task_id = %task.id(), %owner, status = %task.status(), "task created");
        Ok(task)
    }

    /// Returns the caller's task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task exists or
    /// it is owned by another user.
    pub async fn get(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<Task> {
        self.find_owned(owner, id).await
    }

    /// Lists the caller's tasks, optionally filtered by exact status.
    ///
    /// Ordering is insertion order and is stable within a call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(
        &self,
        owner: OwnerId,
        status: Option<TaskStatus>,
    ) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_for_owner(owner, status).await?)
    }

    /// Applies a partial update to the caller's task.
    ///
    /// Ownership and `created_at` are never mutable through this call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an empty update, an
    /// empty title, or an unknown status; [`TaskServiceError::NotFound`]
    /// per [`get`](Self::get)'s visibility rule.
    pub async fn update(
        &self,
        owner: OwnerId,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let patch = request.into_patch()?;
        let mut task = self.find_owned(owner, id).await?;
        task.apply(&patch);
        self.repository.update(&task).await?;
        debug!(task_id = %id, %owner, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes the caller's task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task is visible
    /// to the caller, including a repeated delete of the same identifier.
    pub async fn delete(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<()> {
        self.find_owned(owner, id).await?;
        match self.repository.remove(id).await {
            Ok(()) => {
                info!(task_id = %id, %owner, "task deleted");
                Ok(())
            }
            Err(TaskRepositoryError::NotFound(missing)) => {
                Err(TaskServiceError::NotFound(missing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes every task owned by `owner` in one atomic operation.
    ///
    /// Cascade hook for the external account-deletion collaborator; it is
    /// invoked inside the same logical transaction as the account removal.
    /// Returns the number of removed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the cascade fails, in
    /// which case no task has been removed.
    pub async fn delete_all_for_owner(&self, owner: OwnerId) -> TaskServiceResult<usize> {
        let removed = self.repository.remove_all_for_owner(owner).await?;
        info!(%owner, removed, "cascade-deleted owner tasks");
        Ok(removed)
    }

    /// Fetches a task and enforces the merged not-found/forbidden rule.
    async fn find_owned(&self, owner: OwnerId, id: TaskId) -> TaskServiceResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .filter(|task| task.is_owned_by(owner));
        task.ok_or(TaskServiceError::NotFound(id))
    }
}
