//! Repository port for task storage, lookup, and mutation.

use crate::task::domain::{Task, TaskId, TaskUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task collection contract.
///
/// Implementations must make each mutating operation atomic with respect to
/// other mutations on the same collection: the find-then-mutate sequence
/// inside [`TaskRepository::update`] and [`TaskRepository::remove`] must not
/// interleave with a concurrent insert, update, or removal.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Appends a new task to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a task with the
    /// same identifier is already stored.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns a snapshot of all stored tasks in insertion order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Merges a partial update onto the stored task and returns the merged
    /// result.
    ///
    /// The merge happens inside the repository's critical section so a
    /// concurrent mutation cannot produce a lost update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist; the collection is left unchanged.
    async fn update(&self, id: TaskId, update: &TaskUpdate) -> TaskRepositoryResult<Task>;

    /// Removes a task and returns its prior value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist; the collection is left unchanged.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
