use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;

/// The id of the caller, as resolved from their bearer token.
///
/// `AuthMiddleware` verifies the token and inserts this value into request
/// extensions; handlers take it as an argument. If the middleware did not run,
/// extraction fails with `AppError::Unauthorized`, so a handler can never see
/// an unauthenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUserId(pub Uuid);

impl FromRequest for AuthenticatedUserId {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUserId>().copied() {
            Some(user_id) => ready(Ok(user_id)),
            None => {
                log::error!("no authenticated user on {}; is AuthMiddleware applied?", req.path());
                ready(Err(AppError::Unauthorized("Missing token".into()).into()))
            }
        }
    }
}
