use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{NewTask, TaskPatch},
    tasks::TaskService,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

/// Retrieves the authenticated user's tasks, newest first.
///
/// ## Responses:
/// - `200 OK`: a JSON array of `Task` objects.
/// - `401 Unauthorized`: missing or invalid token.
#[get("")]
pub async fn get_tasks(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = tasks.list(user.0).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// ## Request Body:
/// - `title`: required, non-empty after trimming.
/// - `dueDate` (optional): an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// ## Responses:
/// - `201 Created`: the new `Task`, with `completed: false`.
/// - `400 Bad Request`: missing or empty title.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUserId,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    let task = tasks.create(user.0, task_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Partially updates a task the authenticated user owns.
///
/// Only `title`, `completed` and `dueDate` present in the body are changed;
/// `"dueDate": null` clears the due date.
///
/// ## Responses:
/// - `200 OK`: the updated `Task`.
/// - `400 Bad Request`: empty/null title or null `completed`.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no such task, or it belongs to someone else.
#[patch("/{id}")]
pub async fn update_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUserId,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskPatch>,
) -> Result<impl Responder, AppError> {
    let task = tasks
        .update(user.0, task_id.into_inner(), task_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task the authenticated user owns.
///
/// ## Responses:
/// - `200 OK`: `{"ok": true}`.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no such task, or it belongs to someone else.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUserId,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    tasks.delete(user.0, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}
