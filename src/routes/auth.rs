use crate::{
    auth::{AuthService, LoginRequest, RegisterRequest},
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Register a new user
///
/// ## Responses:
/// - `201 Created`: `{id, name, email}` of the new account.
/// - `400 Bad Request`: a field is missing or empty.
/// - `409 Conflict`: the email is already registered.
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    let user = auth.register(register_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Login user
///
/// ## Responses:
/// - `200 OK`: `{token, user: {id, name, email}}`.
/// - `400 Bad Request`: a field is missing or empty.
/// - `401 Unauthorized`: unknown email or wrong password (same body for both).
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let response = auth.login(login_data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
