pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::auth::AuthMiddleware;
use crate::error::AppError;

/// Registers the `/auth` and `/tasks` scopes. Mount under `/api`.
///
/// Everything under `/tasks` goes through `AuthMiddleware`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/auth")
                .service(auth::register)
                .service(auth::login),
        )
        .service(
            web::scope("/tasks")
                .wrap(AuthMiddleware)
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}

/// Undecodable JSON bodies become `{"error": "Invalid request body"}` with status 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        log::debug!("rejected request body: {}", err);
        AppError::BadRequest("Invalid request body".into()).into()
    })
}

/// The only path parameter is a task id; one that is not a UUID cannot name a task.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| {
        AppError::NotFound("Task not found".into()).into()
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}
