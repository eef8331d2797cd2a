use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountRemoval, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::use_cases::logout_user::ILogoutUseCase;

pub const USER_DELETED: &str = "User deleted";

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    /// Logs the caller out, then removes the account and everything it owns.
    async fn execute(
        &self,
        user_id: Uuid,
        access_token: &str,
    ) -> Result<AccountRemoval, DeleteAccountError>;
}

#[derive(Clone)]
pub struct DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    logout: Arc<dyn ILogoutUseCase + Send + Sync>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, logout: Arc<dyn ILogoutUseCase + Send + Sync>) -> Self {
        Self { repository, logout }
    }
}

#[async_trait]
impl<R> IDeleteAccountUseCase for DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        access_token: &str,
    ) -> Result<AccountRemoval, DeleteAccountError> {
        self.logout.execute(access_token).await;

        let removal = self
            .repository
            .delete_user_cascade(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteAccountError::UserNotFound,
                other => {
                    tracing::error!(user_id = %user_id, error = %other, "Account removal failed");
                    DeleteAccountError::RepositoryError(other.to_string())
                }
            })?;

        tracing::info!(
            user_id = %user_id,
            workouts = removal.workouts,
            exercises = removal.exercises,
            sets = removal.sets,
            "Account deleted"
        );

        Ok(removal)
    }
}
