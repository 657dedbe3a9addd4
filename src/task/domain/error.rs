//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The due date lies before the current time at creation.
    #[error("due date {0} is in the past")]
    DueDateInPast(DateTime<Utc>),
}

/// Error returned while parsing task statuses from external text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
