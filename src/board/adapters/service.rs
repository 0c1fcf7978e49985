//! Gateway adapter backed directly by a [`TaskService`].
//!
//! Binds a service to one authenticated owner at construction time, so
//! the session identity travels with the gateway instead of living in
//! ambient state.

use crate::board::ports::{TaskGateway, TaskGatewayError, TaskGatewayResult};
use crate::task::{
    domain::{OwnerId, Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{TaskService, TaskServiceError, UpdateTaskRequest},
};
use async_trait::async_trait;
use mockable::Clock;

/// In-process gateway over a [`TaskService`] for one owner's session.
pub struct ServiceTaskGateway<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskService<R, C>,
    owner: OwnerId,
}

impl<R, C> Clone for ServiceTaskGateway<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            owner: self.owner,
        }
    }
}

impl<R, C> ServiceTaskGateway<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a gateway for the authenticated owner.
    #[must_use]
    pub const fn new(service: TaskService<R, C>, owner: OwnerId) -> Self {
        Self { service, owner }
    }

    /// Returns the session's owner identity.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }
}

fn map_service_error(err: TaskServiceError) -> TaskGatewayError {
    match err {
        TaskServiceError::NotFound(id) => TaskGatewayError::TaskNotFound(id),
        TaskServiceError::Validation(validation) => {
            TaskGatewayError::Rejected(validation.to_string())
        }
        TaskServiceError::Repository(repository) => TaskGatewayError::transport(repository),
    }
}

#[async_trait]
impl<R, C> TaskGateway for ServiceTaskGateway<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn fetch_tasks(&self) -> TaskGatewayResult<Vec<Task>> {
        self.service
            .list(self.owner, None)
            .await
            .map_err(map_service_error)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskGatewayResult<Task> {
        let request = UpdateTaskRequest::new().with_status(status.as_str());
        self.service
            .update(self.owner, id, request)
            .await
            .map_err(map_service_error)
    }
}
