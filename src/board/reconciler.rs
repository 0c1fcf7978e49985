//! Optimistic status reconciliation between the board and the service.

use crate::board::drag::StatusIntent;
use crate::board::ports::{TaskGateway, TaskGatewayError};
use crate::board::view::BoardView;
use crate::task::domain::{Task, TaskId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by the reconciler.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The intent names a task the board does not know about.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The service rejected the transition; local state has been rolled
    /// back to the pre-intent snapshot.
    #[error("status update for task {task_id} rejected")]
    Rejected {
        /// The task whose transition was rejected.
        task_id: TaskId,
        /// The gateway failure.
        #[source]
        source: TaskGatewayError,
    },

    /// Fetching the authoritative task list failed.
    #[error("board refresh failed")]
    Refresh(#[source] TaskGatewayError),

    /// The local cache lock was poisoned.
    #[error("board cache lock poisoned")]
    CachePoisoned,
}

/// Outcome of applying one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// The target equalled the current status; nothing was sent.
    Noop,
    /// The service confirmed the transition; the returned record is the
    /// server's authoritative version.
    Confirmed(Task),
}

/// Client-side reconciler holding the board's local task cache.
///
/// Intents mutate the cache optimistically before the service call, and
/// each in-flight call carries its own snapshot of the moved task's
/// pre-transition record. When calls for the same task interleave, the
/// optimistic writes land in call order and each resolution confirms or
/// rolls back against its own snapshot only, so one failure cannot revert
/// a later, unrelated, successful transition. The server response is
/// always the final word on success.
pub struct BoardReconciler<G: TaskGateway> {
    gateway: Arc<G>,
    cache: Arc<RwLock<HashMap<TaskId, Task>>>,
}

// Manual impl: cloning shares the cache and gateway, so `G: Clone` must
// not be required.
impl<G: TaskGateway> Clone for BoardReconciler<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<G: TaskGateway> BoardReconciler<G> {
    /// Creates a reconciler with an empty board.
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Replaces the local cache with the service's authoritative list.
    ///
    /// Called when a session starts (login) and whenever the client wants
    /// to resynchronize wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Refresh`] when the fetch fails; the
    /// local cache is left untouched in that case.
    pub async fn refresh(&self) -> Result<(), ReconcileError> {
        let tasks = self
            .gateway
            .fetch_tasks()
            .await
            .map_err(ReconcileError::Refresh)?;
        let mut cache = self.write_cache()?;
        cache.clear();
        cache.extend(tasks.into_iter().map(|task| (task.id(), task)));
        Ok(())
    }

    /// Seeds the local cache directly with known records.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::CachePoisoned`] when the cache lock is
    /// poisoned.
    pub fn load(&self, tasks: impl IntoIterator<Item = Task>) -> Result<(), ReconcileError> {
        let mut cache = self.write_cache()?;
        cache.clear();
        cache.extend(tasks.into_iter().map(|task| (task.id(), task)));
        Ok(())
    }

    /// Drops all local state (logout).
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::CachePoisoned`] when the cache lock is
    /// poisoned.
    pub fn clear(&self) -> Result<(), ReconcileError> {
        self.write_cache()?.clear();
        Ok(())
    }

    /// Re-derives the board projection from the local cache.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::CachePoisoned`] when the cache lock is
    /// poisoned.
    pub fn view(&self) -> Result<BoardView, ReconcileError> {
        let cache = self.read_cache()?;
        Ok(BoardView::from_tasks(cache.values().cloned()))
    }

    /// Applies a status-change intent optimistically.
    ///
    /// A transition to the task's current status is a no-op: no state
    /// mutation and no service call. Otherwise the local record moves
    /// immediately, the service is asked to confirm, and on rejection the
    /// record captured before the move is restored exactly. Confirm and
    /// rollback both write through only if the task is still on the
    /// board, so a logout racing an in-flight intent leaves the cleared
    /// board empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::UnknownTask`] for a task the board does
    /// not know, or [`ReconcileError::Rejected`] after a completed
    /// rollback when the service refuses the transition. Failure is
    /// always reported; it is never swallowed.
    pub async fn apply_intent(&self, intent: StatusIntent) -> Result<IntentOutcome, ReconcileError> {
        let task_id = intent.task_id();
        let target = intent.target();

        // Snapshot and optimistic write under one lock acquisition, so the
        // snapshot is exactly the record this intent displaced.
        let snapshot = {
            let mut cache = self.write_cache()?;
            let task = cache
                .get_mut(&task_id)
                .ok_or(ReconcileError::UnknownTask(task_id))?;
            if task.status() == target {
                return Ok(IntentOutcome::Noop);
            }
            let previous = task.clone();
            task.set_status(target);
            previous
        };

        match self.gateway.update_status(task_id, target).await {
            Ok(server_task) => {
                // A record dropped locally while the call was in flight
                // (logout) stays absent; late acknowledgements never
                // resurrect it.
                if let Some(entry) = self.write_cache()?.get_mut(&task_id) {
                    *entry = server_task.clone();
                }
                Ok(IntentOutcome::Confirmed(server_task))
            }
            Err(source) => {
                if let Some(entry) = self.write_cache()?.get_mut(&task_id) {
                    *entry = snapshot;
                }
                warn!(%task_id, target = %target, error = %source, "rolled back rejected transition");
                Err(ReconcileError::Rejected { task_id, source })
            }
        }
    }

    fn read_cache(&self) -> Result<RwLockReadGuard<'_, HashMap<TaskId, Task>>, ReconcileError> {
        self.cache.read().map_err(|_| ReconcileError::CachePoisoned)
    }

    fn write_cache(&self) -> Result<RwLockWriteGuard<'_, HashMap<TaskId, Task>>, ReconcileError> {
        self.cache
            .write()
            .map_err(|_| ReconcileError::CachePoisoned)
    }
}
