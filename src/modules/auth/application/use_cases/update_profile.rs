use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::ProfileFields;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::use_cases::create_user::{EMAIL_TAKEN, USERNAME_TAKEN};
use crate::modules::auth::application::use_cases::fetch_profile::UserProfile;
use crate::shared::validation::ValidationErrors;

pub const PROFILE_CHANGED: &str = "User info changed";
pub const PROFILE_CONFLICT: &str = "Username or email was taken by another account";
const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Invalid profile: {0}")]
    Validation(ValidationErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn query_failed(e: UserQueryError) -> UpdateProfileError {
    UpdateProfileError::RepositoryError(e.to_string())
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<UserProfile, UpdateProfileError>;
}

#[derive(Clone)]
pub struct UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    /// Flags `username` and `email` when another account holds them.
    async fn check_taken(
        &self,
        user_id: Uuid,
        fields: &ProfileFields,
        errors: &mut ValidationErrors,
    ) -> Result<(), UpdateProfileError> {
        if !errors.has_field("username") {
            if let Some(other) = self
                .query
                .find_by_username(&fields.username)
                .await
                .map_err(query_failed)?
            {
                if other.id != user_id {
                    errors.add("username", USERNAME_TAKEN);
                }
            }
        }
        if !errors.has_field("email") {
            if let Some(other) = self
                .query
                .find_by_email(&fields.email)
                .await
                .map_err(query_failed)?
            {
                if other.id != user_id {
                    errors.add("email", EMAIL_TAKEN);
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<UserProfile, UpdateProfileError> {
        let mut errors = ValidationErrors::default();
        let fields = fields.validated(&mut errors);

        self.check_taken(user_id, &fields, &mut errors).await?;

        errors
            .into_result()
            .map_err(UpdateProfileError::Validation)?;

        let updated = match self.repository.update_profile(user_id, fields.clone()).await {
            Ok(updated) => updated,
            Err(UserRepositoryError::UserNotFound) => return Err(UpdateProfileError::UserNotFound),
            Err(UserRepositoryError::UserAlreadyExists) => {
                // Lost a race on a unique index; look again to name the field
                let mut errors = ValidationErrors::default();
                self.check_taken(user_id, &fields, &mut errors).await?;
                if errors.is_empty() {
                    errors.add(NON_FIELD_ERRORS, PROFILE_CONFLICT);
                }
                return Err(UpdateProfileError::Validation(errors));
            }
            Err(UserRepositoryError::DatabaseError(msg)) => {
                return Err(UpdateProfileError::RepositoryError(msg))
            }
        };

        tracing::info!(user_id = %user_id, "Profile updated");

        Ok(updated.into())
    }
}
