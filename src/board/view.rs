//! Three-column board projection.

use crate::task::domain::{Task, TaskId, TaskStatus};

/// A partition of known tasks into the three status columns.
///
/// The view is a projection, not a source of truth: it is always rebuilt
/// by re-partitioning the known task set by status, so it is total and
/// disjoint by construction. Column identity and status value are the
/// same enum; there is no separate column concept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pending: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl BoardView {
    /// Builds the projection by partitioning `tasks` by status.
    ///
    /// Buckets are ordered by creation time, then id, so rebuilding from
    /// the same task set always yields an equal view.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut view = Self::default();
        for task in tasks {
            view.bucket_mut(task.status()).push(task);
        }
        for status in TaskStatus::ALL {
            view.bucket_mut(status)
                .sort_by_key(|task| (task.created_at(), task.id().into_inner()));
        }
        view
    }

    /// Returns the tasks in the given column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Returns the column currently holding the task, if known.
    #[must_use]
    pub fn status_of(&self, id: TaskId) -> Option<TaskStatus> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| self.column(*status).iter().any(|task| task.id() == id))
    }

    /// Returns `true` when the task appears anywhere on the board.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.status_of(id).is_some()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Pending => &mut self.pending,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}
