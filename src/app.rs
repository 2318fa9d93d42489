//! Application assembly: shared services and the actix `App` factory used by
//! both the binary and the integration tests.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};
use std::sync::Arc;

use crate::auth::{AuthService, TokenService};
use crate::error::AppError;
use crate::routes::{self, health};
use crate::store::{CredentialStore, TaskStore};
use crate::tasks::TaskService;

/// Services shared by every worker. Cloning is cheap; each field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth: web::Data<AuthService>,
    pub tasks: web::Data<TaskService>,
    pub tokens: web::Data<TokenService>,
}

impl AppState {
    /// Wires the services around the given stores. The signing secret is shared by
    /// token issuance (login) and verification (`AuthMiddleware`).
    pub fn new(
        users: Arc<dyn CredentialStore>,
        tasks: Arc<dyn TaskStore>,
        jwt_secret: &str,
        bcrypt_cost: u32,
    ) -> Result<Self, AppError> {
        let tokens = Arc::new(TokenService::new(jwt_secret));
        let auth = AuthService::new(users, tokens.clone(), bcrypt_cost)?;

        Ok(Self {
            auth: web::Data::new(auth),
            tasks: web::Data::new(TaskService::new(tasks)),
            tokens: web::Data::from(tokens),
        })
    }
}

pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state.auth)
        .app_data(state.tasks)
        .app_data(state.tokens)
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .service(health::index)
        .service(health::health)
        .service(web::scope("/api").configure(routes::config))
        .default_service(web::to(routes::not_found))
}
