use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CredentialStore, TaskStore};
use crate::error::AppError;
use crate::models::{Task, TaskChanges, User};

/// In-process store. Users are keyed by email, which is what makes the
/// uniqueness check and the insert a single step under the write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    // Insertion order doubles as a tiebreak for equal creation timestamps.
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn task_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user.clone())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().await;
        let mut owned: Vec<Task> = tasks
            .iter()
            .rev()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn insert_task(&self, task: &Task) -> Result<Task, AppError> {
        self.tasks.write().await.push(task.clone());
        Ok(task.clone())
    }

    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, AppError> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks
            .iter_mut()
            .find(|task| task.id == task_id && task.user_id == user_id)
            .map(|task| {
                task.apply(changes);
                task.clone()
            }))
    }

    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<bool, AppError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|task| !(task.id == task_id && task.user_id == user_id));
        Ok(tasks.len() != before)
    }
}
