use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::modules::auth::application::use_cases::fetch_profile::UserProfile;
use crate::shared::validation::{ValidationErrors, REQUIRED};

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let username = username.trim().to_string();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        }
        if password.is_empty() {
            errors.add("password", REQUIRED);
        }

        errors.into_result()?;
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid login: {0}")]
    Validation(ValidationErrors),

    #[error("Please enter a correct username and password")]
    InvalidCredentials,

    #[error("This account has not been activated yet")]
    NotActivated,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LoginUserResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    pub user: UserProfile,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_ok = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !password_ok {
            tracing::warn!(username = %request.username(), "Failed login attempt");
            return Err(LoginError::InvalidCredentials);
        }

        // Only reported once the password matched
        if !user.is_activated || !user.is_active {
            return Err(LoginError::NotActivated);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginUserResponse {
            access_token,
            token_type: "Bearer".to_string(),
            user: user.into(),
        })
    }
}
