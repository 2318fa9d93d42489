use std::sync::Arc;
use tokio::task::spawn_blocking;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenService;
use crate::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::AppError;
use crate::models::{User, UserPublic};
use crate::store::CredentialStore;

const MISSING_FIELDS: &str = "Missing fields";
const EMAIL_TAKEN: &str = "Email already registered";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Registration and login.
///
/// bcrypt work is moved to the blocking thread pool so a slow hash never holds
/// up an async worker that is serving other users.
pub struct AuthService {
    users: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    hash_cost: u32,
    // Verified against when the email is unknown, so both login failures cost one bcrypt verify.
    dummy_hash: String,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn CredentialStore>,
        tokens: Arc<TokenService>,
        hash_cost: u32,
    ) -> Result<Self, AppError> {
        let dummy_hash = hash_password("not-a-real-password", hash_cost)?;
        Ok(Self {
            users,
            tokens,
            hash_cost,
            dummy_hash,
        })
    }

    pub async fn register(&self, input: RegisterRequest) -> Result<UserPublic, AppError> {
        input
            .validate()
            .map_err(|_| AppError::ValidationError(MISSING_FIELDS.into()))?;

        if self.users.find_user_by_email(&input.email).await?.is_some() {
            log::warn!("registration rejected, email already in use: {}", input.email);
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }

        let cost = self.hash_cost;
        let RegisterRequest {
            name,
            email,
            password,
        } = input;
        let password_hash = spawn_blocking(move || hash_password(&password, cost)).await??;

        // A concurrent registration can still win between the check and the insert;
        // the store reports that as a conflict too.
        let user = match self
            .users
            .insert_user(&User::new(name, email, password_hash))
            .await
        {
            Err(AppError::Conflict(_)) => {
                log::warn!("registration lost a race on a duplicate email");
                return Err(AppError::Conflict(EMAIL_TAKEN.into()));
            }
            other => other?,
        };

        log::info!("registered user {}", user.id);
        Ok(UserPublic::from(&user))
    }

    pub async fn login(&self, input: LoginRequest) -> Result<LoginResponse, AppError> {
        input
            .validate()
            .map_err(|_| AppError::ValidationError(MISSING_FIELDS.into()))?;

        let user = self.users.find_user_by_email(&input.email).await?;
        let stored_hash = user
            .as_ref()
            .map(|user| user.password_hash.clone())
            .unwrap_or_else(|| self.dummy_hash.clone());

        let password = input.password;
        let password_ok = spawn_blocking(move || verify_password(&password, &stored_hash)).await??;

        let user = match user {
            Some(user) if password_ok => user,
            _ => {
                log::warn!("failed login for {}", input.email);
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
            }
        };

        let token = self.tokens.issue(user.id)?;
        log::info!("user {} logged in", user.id);

        Ok(LoginResponse {
            token,
            user: UserPublic::from(&user),
        })
    }
}
