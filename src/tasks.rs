//! Task CRUD for the authenticated user.
//!
//! Every operation takes the caller's id and passes it down to the store, which
//! filters on it. A task owned by another user is reported exactly like a
//! missing one.

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskChanges, TaskPatch};
use crate::store::TaskStore;

const TASK_NOT_FOUND: &str = "Task not found";

pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// The caller's tasks, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        self.store.list_tasks(user_id).await
    }

    pub async fn create(&self, user_id: Uuid, input: NewTask) -> Result<Task, AppError> {
        let input = input.normalized();
        input
            .validate()
            .map_err(|_| AppError::ValidationError("Title required".into()))?;

        let task = self.store.insert_task(&Task::new(input, user_id)).await?;
        log::info!("user {} created task {}", user_id, task.id);
        Ok(task)
    }

    /// Applies only the fields present in `patch`.
    pub async fn update(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
    ) -> Result<Task, AppError> {
        let changes = TaskChanges::try_from(patch)?;

        let task = self
            .store
            .update_task(user_id, task_id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND.into()))?;
        log::info!("user {} updated task {}", user_id, task_id);
        Ok(task)
    }

    pub async fn delete(&self, user_id: Uuid, task_id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_task(user_id, task_id).await? {
            return Err(AppError::NotFound(TASK_NOT_FOUND.into()));
        }
        log::info!("user {} deleted task {}", user_id, task_id);
        Ok(())
    }
}
