//! Drag gesture translation, independent of any UI toolkit.
//!
//! A pointer gesture (press on a card, move, release) is tracked by a
//! [`DragSession`] and resolved into at most one [`StatusIntent`]. The
//! mapping from gesture outcome to intent is pure: cancellations,
//! releases outside a column, and drops on the task's current column all
//! produce no intent and touch no state.

use crate::board::view::BoardView;
use crate::task::domain::{TaskId, TaskStatus};

/// A requested status transition for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIntent {
    task_id: TaskId,
    target: TaskStatus,
}

impl StatusIntent {
    /// Creates an intent to move a task to `target`.
    #[must_use]
    pub const fn new(task_id: TaskId, target: TaskStatus) -> Self {
        Self { task_id, target }
    }

    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested column.
    #[must_use]
    pub const fn target(&self) -> TaskStatus {
        self.target
    }
}

/// How a drag gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The card was released over a column.
    Dropped {
        /// The dragged task.
        task_id: TaskId,
        /// The column under the release point.
        column: TaskStatus,
    },
    /// The card was released outside any drop target.
    NoTarget {
        /// The dragged task.
        task_id: TaskId,
    },
    /// The gesture was interrupted before release.
    Cancelled,
}

impl GestureOutcome {
    /// Resolves the gesture into at most one intent.
    ///
    /// Produces `Some` only for a drop on a column that differs from the
    /// task's current column, for a task the board knows about. Every
    /// other outcome, including a drop back onto the current column,
    /// yields `None`: not an error, a no-intent outcome.
    #[must_use]
    pub fn into_intent(self, view: &BoardView) -> Option<StatusIntent> {
        let Self::Dropped { task_id, column } = self else {
            return None;
        };
        let current = view.status_of(task_id)?;
        if current == column {
            return None;
        }
        Some(StatusIntent::new(task_id, column))
    }
}

/// Tracks one in-flight drag gesture.
///
/// Begun by a press on a card; fed column hover updates while the
/// pointer moves; consumed by exactly one release or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    task_id: TaskId,
    hovered: Option<TaskStatus>,
}

impl DragSession {
    /// Starts a gesture from a press on the given card.
    #[must_use]
    pub const fn begin(task_id: TaskId) -> Self {
        Self {
            task_id,
            hovered: None,
        }
    }

    /// Returns the task being dragged.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Records which column the pointer is currently over, if any.
    pub const fn drag_over(&mut self, column: Option<TaskStatus>) {
        self.hovered = column;
    }

    /// Ends the gesture with a release at the last hovered position.
    #[must_use]
    pub const fn release(self) -> GestureOutcome {
        match self.hovered {
            Some(column) => GestureOutcome::Dropped {
                task_id: self.task_id,
                column,
            },
            None => GestureOutcome::NoTarget {
                task_id: self.task_id,
            },
        }
    }

    /// Ends the gesture without a release (interruption).
    #[must_use]
    pub const fn cancel(self) -> GestureOutcome {
        GestureOutcome::Cancelled
    }
}
