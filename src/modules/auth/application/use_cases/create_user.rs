use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    validate_new_password, ProfileFields, User,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::validation::ValidationErrors;

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const EMAIL_TAKEN: &str = "A user with that email already exists.";

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    pub send_messages: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CreateUserOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub send_messages: bool,
    pub is_activated: bool,
}

impl From<User> for CreateUserOutput {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            send_messages: user.send_messages,
            is_activated: user.is_activated,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid registration: {0}")]
    Validation(ValidationErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
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

    async fn check_unique(
        &self,
        profile: &ProfileFields,
        errors: &mut ValidationErrors,
    ) -> Result<(), CreateUserError> {
        if !errors.has_field("username") {
            let taken = self
                .query
                .find_by_username(&profile.username)
                .await
                .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
            if taken.is_some() {
                errors.add("username", USERNAME_TAKEN);
            }
        }

        if !errors.has_field("email") {
            let taken = self
                .query
                .find_by_email(&profile.email)
                .await
                .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
            if taken.is_some() {
                errors.add("email", EMAIL_TAKEN);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let mut errors = ValidationErrors::default();

        let profile = ProfileFields {
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            send_messages: input.send_messages,
        }
        .validated(&mut errors);

        validate_new_password(
            &input.password1,
            &input.password2,
            "password1",
            "password2",
            &mut errors,
        );

        self.check_unique(&profile, &mut errors).await?;
        errors.into_result().map_err(CreateUserError::Validation)?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.password1)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: profile.username,
            email: profile.email,
            password_hash,
            first_name: profile.first_name,
            last_name: profile.last_name,
            is_active: false,
            is_activated: false,
            send_messages: profile.send_messages,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create_user(user).await.map_err(|e| match e {
            // Lost a race with a concurrent registration
            UserRepositoryError::UserAlreadyExists => {
                CreateUserError::Validation(ValidationErrors::single("username", USERNAME_TAKEN))
            }
            other => CreateUserError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(created.into())
    }
}
