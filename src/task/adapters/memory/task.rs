//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{OwnerId, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// All operations run under a single map-wide lock, which also provides
/// the per-task write serialization the port requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Insertion-order index per owner; gives list_for_owner its stable order.
    owner_index: HashMap<OwnerId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .owner_index
            .entry(task.owner())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_for_owner(
        &self,
        owner: OwnerId,
        status: Option<TaskStatus>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let tasks = state
            .owner_index
            .get(&owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id))
                    .filter(|task| status.is_none_or(|wanted| task.status() == wanted))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        // Owner is immutable, so the insertion-order index is unaffected.
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(task) = state.tasks.remove(&id) else {
            return Err(TaskRepositoryError::NotFound(id));
        };
        if let Some(ids) = state.owner_index.get_mut(&task.owner()) {
            ids.retain(|entry| *entry != id);
            if ids.is_empty() {
                state.owner_index.remove(&task.owner());
            }
        }
        Ok(())
    }

    async fn remove_all_for_owner(&self, owner: OwnerId) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(ids) = state.owner_index.remove(&owner) else {
            return Ok(0);
        };
        for id in &ids {
            state.tasks.remove(id);
        }
        Ok(ids.len())
    }
}
