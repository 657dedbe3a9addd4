//! Task aggregate root and partial-update value object.

use super::{ParseTaskStatusError, TaskDescription, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task completion status.
///
/// Set to [`TaskStatus::Open`] by the store on creation and freely
/// overwritten by updates; no transition restrictions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task is outstanding.
    Open,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "OPEN" => Ok(Self::Open),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task aggregate root.
///
/// Serialises to the wire shape `{id, title, description, dueDate, status}`
/// with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    due_date: DateTime<Utc>,
    status: TaskStatus,
}

impl Task {
    /// Creates a new open task with a generated identifier.
    ///
    /// The due date is compared against the clock's current time at the
    /// moment of the call; a due date equal to now is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateInPast`] when the due date lies
    /// strictly before the current time.
    pub fn new(
        title: TaskTitle,
        description: TaskDescription,
        due_date: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if due_date < clock.utc() {
            return Err(TaskDomainError::DueDateInPast(due_date));
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description,
            due_date,
            status: TaskStatus::Open,
        })
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

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Merges a partial update onto this task.
    ///
    /// Each field present in the update replaces the stored value; absent
    /// fields retain their previous value. The identifier is never altered.
    /// Replacement due dates are not checked against the clock; the past
    /// date restriction applies to creation only.
    pub fn apply(&mut self, update: &TaskUpdate) {
        if let Some(title) = update.title() {
            self.title = title.clone();
        }
        if let Some(description) = update.description() {
            self.description = description.clone();
        }
        if let Some(due_date) = update.due_date() {
            self.due_date = due_date;
        }
        if let Some(status) = update.status() {
            self.status = status;
        }
    }
}

/// Partial update for a stored task.
///
/// Models the "present overwrites, absent retains" merge rule explicitly:
/// every field is optional and already validated, so applying an update
/// cannot violate task invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    title: Option<TaskTitle>,
    description: Option<TaskDescription>,
    due_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Creates an empty update that retains every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the replacement due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the replacement status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }
}
