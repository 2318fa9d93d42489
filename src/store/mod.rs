//! Persistence ports for users and tasks.
//!
//! Services only see these traits. `postgres::PgStore` is the production backend;
//! `memory::MemoryStore` keeps everything in process and backs the test suite.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskChanges, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persists a new user. Fails with `AppError::Conflict` if the email is taken,
    /// even when a concurrent registration won the race.
    async fn insert_user(&self, user: &User) -> Result<User, AppError>;
}

/// Every method is scoped by the owning user; a task owned by someone else is
/// indistinguishable from one that does not exist.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Tasks owned by `user_id`, newest first.
    async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>, AppError>;

    async fn insert_task(&self, task: &Task) -> Result<Task, AppError>;

    /// Returns `None` when no task `task_id` is owned by `user_id`.
    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, AppError>;

    /// Returns `false` when no task `task_id` is owned by `user_id`.
    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<bool, AppError>;
}
