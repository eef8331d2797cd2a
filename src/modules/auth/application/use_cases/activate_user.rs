use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOutcome {
    Activated,
    /// The link was followed before; nothing changed.
    AlreadyActivated,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActivateUserError {
    #[error("Activation link is invalid or expired")]
    BadSignature,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IActivateUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<ActivationOutcome, ActivateUserError>;
}

#[derive(Clone)]
pub struct ActivateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> ActivateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IActivateUserUseCase for ActivateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<ActivationOutcome, ActivateUserError> {
        let username = self
            .token_provider
            .verify_activation_token(token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected activation link");
                ActivateUserError::BadSignature
            })?;

        let user = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| ActivateUserError::RepositoryError(e.to_string()))?
            .ok_or(ActivateUserError::UserNotFound)?;

        if user.is_activated {
            return Ok(ActivationOutcome::AlreadyActivated);
        }

        self.repository
            .activate_user(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ActivateUserError::UserNotFound,
                other => ActivateUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Account activated");

        Ok(ActivationOutcome::Activated)
    }
}
