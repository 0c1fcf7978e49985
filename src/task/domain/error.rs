//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the 200-character storage limit.
    #[error("task title exceeds 200 character limit ({0} characters)")]
    TitleTooLong(usize),

    /// The status value is outside the fixed three-element enum.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// A partial update carried no fields at all.
    #[error("update must include at least one field")]
    EmptyUpdate,
}

impl From<ParseTaskStatusError> for TaskDomainError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::UnknownStatus(err.0)
    }
}

/// Error returned while parsing status values from the wire or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
