//! In-memory task repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are held in insertion order so due-date sorting can break ties by
/// arrival. Every operation acquires the lock exactly once, keeping each
/// find-then-mutate sequence atomic with respect to other mutations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Converts a poisoned-lock error into a repository persistence error.
fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        if tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn update(&self, id: TaskId, update: &TaskUpdate) -> TaskRepositoryResult<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(update);
        Ok(task.clone())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(tasks.remove(index))
    }
}
