//! Service layer for task creation, retrieval, update, and deletion.

use super::envelope::ResponseEnvelope;
use crate::task::{
    domain::{Task, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: DateTime<Utc>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
        }
    }
}

/// Request payload for partially updating a stored task.
///
/// Only fields set through the `with_*` builders are replaced; the stored
/// task retains every other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates an update request targeting the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            due_date: None,
            status: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Input validation failed; surfaced as a conflict at the boundary.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No stored task matches the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Unexpected failure inside the store or its repository.
    #[error("task store internal failure: {0}")]
    Internal(#[source] TaskRepositoryError),
}

impl TaskStoreError {
    /// Returns the status code the boundary layer maps this failure to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 409,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}

impl From<TaskRepositoryError> for TaskStoreError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Internal(other),
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// Sole owner of the task collection: every read and mutation passes
/// through one of its five operations, and each mutating operation is
/// atomic with respect to the others via the repository contract.
#[derive(Clone)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store over the given repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task and appends it to the collection.
    ///
    /// The store generates the identifier and sets the status to
    /// [`TaskStatus::Open`]; callers supply neither.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the title or description
    /// is empty or the due date lies in the past, and
    /// [`TaskStoreError::Internal`] on an identifier collision or storage
    /// failure. Nothing is appended on any failure.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> TaskStoreResult<ResponseEnvelope<Task>> {
        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description)?;
        let task = Task::new(title, description, request.due_date, &*self.clock)?;
        self.repository.insert(&task).await?;
        Ok(ResponseEnvelope::new(201, task))
    }

    /// Returns all stored tasks ordered ascending by due date.
    ///
    /// Tasks with equal due dates retain their relative insertion order.
    /// The returned list is a fresh snapshot, not a view into the backing
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Internal`] when the repository snapshot
    /// fails.
    pub async fn get_tasks(&self) -> TaskStoreResult<ResponseEnvelope<Vec<Task>>> {
        let mut tasks = self.repository.list().await?;
        tasks.sort_by_key(Task::due_date);
        Ok(ResponseEnvelope::new(200, tasks))
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no stored task matches.
    pub async fn get_task(&self, id: TaskId) -> TaskStoreResult<ResponseEnvelope<Task>> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskStoreError::NotFound(id))?;
        Ok(ResponseEnvelope::new(200, task))
    }

    /// Merges a partial update onto the stored task and returns the result.
    ///
    /// Fields present in the request replace the stored values after
    /// validation; absent fields are retained. Replacement due dates are
    /// not checked against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when a present text field is
    /// empty, and [`TaskStoreError::NotFound`] when the identifier does not
    /// match any stored task. The stored task is unchanged on failure.
    pub async fn update_task(
        &self,
        request: UpdateTaskRequest,
    ) -> TaskStoreResult<ResponseEnvelope<Task>> {
        let mut update = TaskUpdate::new();
        if let Some(title) = request.title {
            update = update.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = request.description {
            update = update.with_description(TaskDescription::new(description)?);
        }
        if let Some(due_date) = request.due_date {
            update = update.with_due_date(due_date);
        }
        if let Some(status) = request.status {
            update = update.with_status(status);
        }

        let merged = self.repository.update(request.id, &update).await?;
        Ok(ResponseEnvelope::new(200, merged))
    }

    /// Removes the task with the given identifier.
    ///
    /// The envelope carries the removed task's prior value as a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no stored task matches;
    /// the collection is unchanged in that case.
    pub async fn delete_task(&self, id: TaskId) -> TaskStoreResult<ResponseEnvelope<Task>> {
        let removed = self.repository.remove(id).await?;
        Ok(ResponseEnvelope::new(200, removed))
    }
}
