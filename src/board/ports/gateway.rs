//! Gateway port between the board client and the task service.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// The board client's view of the task service boundary.
///
/// This is the reconciler's only path to persistence; the caller's
/// identity is a property of the gateway instance, established when the
/// session is created, never ambient state.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches the authoritative task list for the session's owner.
    async fn fetch_tasks(&self) -> TaskGatewayResult<Vec<Task>>;

    /// Asks the service to move a task to `status`.
    ///
    /// Returns the server's record, which is authoritative and may have
    /// normalized fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::TaskNotFound`] when the task is not
    /// visible to the session's owner, or another variant when the
    /// service rejects the update or transport fails.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskGatewayResult<Task>;
}

/// Errors surfaced through the gateway.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The task is not visible to the session's owner.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The service rejected the request.
    #[error("update rejected: {0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGatewayError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
