use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use uuid::Uuid;

use super::{CredentialStore, TaskStore};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Task, TaskChanges, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";
const TASK_COLUMNS: &str = "id, user_id, title, completed, due_date, created_at, updated_at";

/// PostgreSQL-backed store. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the pool described by `config` and waits for a first connection,
    /// so a bad URL or an unreachable server fails at startup.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let mut options = PgConnectOptions::from_str(&config.database_url)?;
        if let Some(name) = &config.database_name {
            options = options.database(name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations in `migrations/`.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, user: &User) -> Result<User, AppError> {
        // A unique violation on users.email converts to AppError::Conflict.
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC",
            TASK_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn insert_task(&self, task: &Task) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (id, user_id, title, completed, due_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(task.id)
        .bind(task.user_id)
        .bind(&task.title)
        .bind(task.completed)
        .bind(task.due_date)
        .bind(task.created_at)
        .bind(task.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, AppError> {
        // $5 says whether the due date was sent at all, since NULL in $6 means "clear it".
        let task = sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks
             SET title = COALESCE($3, title),
                 completed = COALESCE($4, completed),
                 due_date = CASE WHEN $5 THEN $6 ELSE due_date END,
                 updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(task_id)
        .bind(user_id)
        .bind(changes.title.as_deref())
        .bind(changes.completed)
        .bind(changes.due_date.is_some())
        .bind(changes.due_date.flatten())
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
