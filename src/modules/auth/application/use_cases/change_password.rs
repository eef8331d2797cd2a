use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::validate_new_password;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::validation::{ValidationErrors, REQUIRED};

pub const PASSWORD_CHANGED: &str = "Password changed";
pub const OLD_PASSWORD_INCORRECT: &str =
    "Your old password was entered incorrectly. Please enter it again.";

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Invalid password change: {0}")]
    Validation(ValidationErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError>;
}

#[derive(Clone)]
pub struct ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IChangePasswordUseCase for ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let mut errors = ValidationErrors::default();

        if input.old_password.is_empty() {
            errors.add("old_password", REQUIRED);
        } else {
            let matches = self
                .password_hasher
                .verify_password(&input.old_password, &user.password_hash)
                .await
                .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
            if !matches {
                errors.add("old_password", OLD_PASSWORD_INCORRECT);
            }
        }

        validate_new_password(
            &input.new_password1,
            &input.new_password2,
            "new_password1",
            "new_password2",
            &mut errors,
        );

        errors
            .into_result()
            .map_err(ChangePasswordError::Validation)?;

        let new_hash = self
            .password_hasher
            .hash_password(&input.new_password1)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user_id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
