use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{ProfileFields, User};

/// Row counts removed together with an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountRemoval {
    pub workouts: u64,
    pub exercises: u64,
    pub sets: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Flips both `is_active` and `is_activated`.
    async fn activate_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Removes the user and everything they own in one transaction,
    /// children before parents: sets, exercises, workouts, user.
    async fn delete_user_cascade(&self, user_id: Uuid)
        -> Result<AccountRemoval, UserRepositoryError>;
}
