//! Task aggregate root.

use super::{OwnerId, TaskId, TaskPatch, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-owned unit of work.
///
/// Serializes to the canonical record shape: `{id, title,
/// description|null, status, due_date|null, created_at, owner}` with
/// RFC 3339 UTC timestamps. `id`, `owner`, and `created_at` are set once
/// at creation and have no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    owner: OwnerId,
}

/// Validated input for creating a task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated title.
    pub title: TaskTitle,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Initial status; defaults to [`TaskStatus::Pending`].
    pub status: TaskStatus,
    /// Optional due date. No ordering constraint against creation time.
    pub due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted owner identity.
    pub owner: OwnerId,
}

impl Task {
    /// Creates a new task owned by the authenticated caller.
    #[must_use]
    pub fn new(owner: OwnerId, data: NewTaskData, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at: clock.utc(),
            owner,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            owner: data.owner,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns `true` when the task is owned by `owner`.
    #[must_use]
    pub fn is_owned_by(&self, owner: OwnerId) -> bool {
        self.owner == owner
    }

    /// Sets the status, leaving every other field untouched.
    ///
    /// Used both when applying a server-side patch and for the client's
    /// optimistic board projection.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Applies a validated partial update.
    ///
    /// Fields absent from the patch are left unchanged.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(description) = patch.description() {
            self.description = description.clone();
        }
        if let Some(status) = patch.status() {
            self.set_status(status);
        }
        if let Some(due_date) = patch.due_date() {
            self.due_date = due_date;
        }
    }
}
