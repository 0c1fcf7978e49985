//! End-to-end drag-to-reconcile flows over a real in-memory service.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasklane::board::{
    adapters::ServiceTaskGateway,
    drag::DragSession,
    reconciler::{BoardReconciler, IntentOutcome, ReconcileError},
};
use tasklane::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{OwnerId, TaskStatus},
    services::{CreateTaskRequest, TaskService},
};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;
type TestGateway = ServiceTaskGateway<InMemoryTaskRepository, DefaultClock>;

struct Session {
    service: TestService,
    owner: OwnerId,
    reconciler: BoardReconciler<TestGateway>,
}

#[fixture]
fn session() -> Session {
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let owner = OwnerId::new();
    let gateway = ServiceTaskGateway::new(service.clone(), owner);
    Session {
        service,
        owner,
        reconciler: BoardReconciler::new(Arc::new(gateway)),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_a_card_moves_it_on_the_server(session: Session) -> eyre::Result<()> {
    let created = session
        .service
        .create(session.owner, CreateTaskRequest::new("Write spec"))
        .await?;
    session.reconciler.refresh().await?;

    let view = session.reconciler.view()?;
    eyre::ensure!(
        view.status_of(created.id()) == Some(TaskStatus::Pending),
        "the fresh board must show the task as pending"
    );

    let mut drag = DragSession::begin(created.id());
    drag.drag_over(Some(TaskStatus::Completed));
    let intent = drag
        .release()
        .into_intent(&view)
        .ok_or_else(|| eyre::eyre!("drop on another column must yield an intent"))?;

    let outcome = session.reconciler.apply_intent(intent).await?;
    eyre::ensure!(
        matches!(outcome, IntentOutcome::Confirmed(_)),
        "the service must confirm the transition"
    );

    let completed = session
        .service
        .list(session.owner, Some(TaskStatus::Completed))
        .await?;
    eyre::ensure!(
        completed.iter().any(|task| task.id() == created.id()),
        "the server must report the task as completed"
    );
    let pending = session
        .service
        .list(session.owner, Some(TaskStatus::Pending))
        .await?;
    eyre::ensure!(
        pending.is_empty(),
        "the server must no longer report the task as pending"
    );

    let board = session.reconciler.view()?;
    eyre::ensure!(
        board.status_of(created.id()) == Some(TaskStatus::Completed),
        "the board must agree with the server"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_a_card_on_its_own_column_is_silent(session: Session) -> eyre::Result<()> {
    let created = session
        .service
        .create(session.owner, CreateTaskRequest::new("Write spec"))
        .await?;
    session.reconciler.refresh().await?;
    let view = session.reconciler.view()?;

    let mut drag = DragSession::begin(created.id());
    drag.drag_over(Some(TaskStatus::Pending));
    eyre::ensure!(
        drag.release().into_intent(&view).is_none(),
        "a self-drop must produce no intent"
    );
    eyre::ensure!(
        session.reconciler.view()? == view,
        "the board must be untouched"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_rejected_move_leaves_the_board_as_it_was(session: Session) -> eyre::Result<()> {
    let created = session
        .service
        .create(session.owner, CreateTaskRequest::new("Write spec"))
        .await?;
    session.reconciler.refresh().await?;
    let before = session.reconciler.view()?;

    // The task vanishes server-side while the board still shows it.
    session.service.delete(session.owner, created.id()).await?;

    let mut drag = DragSession::begin(created.id());
    drag.drag_over(Some(TaskStatus::InProgress));
    let intent = drag
        .release()
        .into_intent(&before)
        .ok_or_else(|| eyre::eyre!("drop on another column must yield an intent"))?;

    let result = session.reconciler.apply_intent(intent).await;
    eyre::ensure!(
        matches!(result, Err(ReconcileError::Rejected { task_id, .. }) if task_id == created.id()),
        "the stale move must be rejected"
    );
    eyre::ensure!(
        session.reconciler.view()? == before,
        "rollback must restore the exact pre-intent board"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_the_board(session: Session) -> eyre::Result<()> {
    session
        .service
        .create(session.owner, CreateTaskRequest::new("Write spec"))
        .await?;
    session.reconciler.refresh().await?;
    eyre::ensure!(!session.reconciler.view()?.is_empty(), "board populated");

    session.reconciler.clear()?;
    eyre::ensure!(
        session.reconciler.view()?.is_empty(),
        "logout must drop all local state"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_session_only_sees_its_own_tasks(session: Session) -> eyre::Result<()> {
    session
        .service
        .create(OwnerId::new(), CreateTaskRequest::new("Someone else's"))
        .await?;
    session.reconciler.refresh().await?;

    eyre::ensure!(
        session.reconciler.view()?.is_empty(),
        "another owner's tasks must never reach this board"
    );
    Ok(())
}
