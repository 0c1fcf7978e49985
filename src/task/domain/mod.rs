//! Domain model for task records.
//!
//! The task domain models owned task records, their status enum, and
//! validated partial updates while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod patch;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{OwnerId, TaskId};
pub use patch::TaskPatch;
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task};
pub use title::TaskTitle;
