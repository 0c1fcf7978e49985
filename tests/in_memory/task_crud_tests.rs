//! In-memory integration tests for task CRUD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasklane::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{OwnerId, TaskStatus},
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_moves_between_status_filters(service: TestService) -> eyre::Result<()> {
    let owner = OwnerId::new();
    let created = service
        .create(
            owner,
            CreateTaskRequest::new("Write spec").with_status("pending"),
        )
        .await?;

    let pending = service.list(owner, Some(TaskStatus::Pending)).await?;
    eyre::ensure!(
        pending.iter().any(|task| task.id() == created.id()),
        "pending filter must include the new task"
    );

    service
        .update(
            owner,
            created.id(),
            UpdateTaskRequest::new().with_status("completed"),
        )
        .await?;

    let completed = service.list(owner, Some(TaskStatus::Completed)).await?;
    eyre::ensure!(
        completed.iter().any(|task| task.id() == created.id()),
        "completed filter must include the moved task"
    );

    let still_pending = service.list(owner, Some(TaskStatus::Pending)).await?;
    eyre::ensure!(
        still_pending.iter().all(|task| task.id() != created.id()),
        "pending filter must exclude the moved task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_owners_never_see_each_other(service: TestService) -> eyre::Result<()> {
    let alice = OwnerId::new();
    let bob = OwnerId::new();

    let alices_task = service
        .create(alice, CreateTaskRequest::new("Alice's task"))
        .await?;
    service
        .create(bob, CreateTaskRequest::new("Bob's task"))
        .await?;

    let bobs_view = service.list(bob, None).await?;
    eyre::ensure!(bobs_view.len() == 1, "Bob must see only his own task");

    let get_result = service.get(bob, alices_task.id()).await;
    eyre::ensure!(
        matches!(get_result, Err(TaskServiceError::NotFound(_))),
        "a foreign task must be indistinguishable from a missing one"
    );

    let update_result = service
        .update(
            bob,
            alices_task.id(),
            UpdateTaskRequest::new().with_title("Hijacked"),
        )
        .await;
    eyre::ensure!(
        matches!(update_result, Err(TaskServiceError::NotFound(_))),
        "foreign updates must be rejected as not found"
    );

    let unchanged = service.get(alice, alices_task.id()).await?;
    eyre::ensure!(
        unchanged.title().as_str() == "Alice's task",
        "Alice's task must be untouched"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_deletion_cascades_atomically(service: TestService) -> eyre::Result<()> {
    let leaving = OwnerId::new();
    let staying = OwnerId::new();

    for title in ["Pack boxes", "Cancel subscriptions"] {
        service.create(leaving, CreateTaskRequest::new(title)).await?;
    }
    service
        .create(staying, CreateTaskRequest::new("Keep working"))
        .await?;

    let removed = service.delete_all_for_owner(leaving).await?;
    eyre::ensure!(removed == 2, "both tasks must be removed, got {removed}");

    let orphaned = service.list(leaving, None).await?;
    eyre::ensure!(orphaned.is_empty(), "no task may survive the cascade");

    let untouched = service.list(staying, None).await?;
    eyre::ensure!(untouched.len() == 1, "other owners must be unaffected");
    Ok(())
}
