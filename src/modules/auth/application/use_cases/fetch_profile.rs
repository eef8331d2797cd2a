use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::UserQuery;

/// Account fields visible to their owner. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub send_messages: bool,
    pub is_activated: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            send_messages: user.send_messages,
            is_activated: user.is_activated,
            date_joined: user.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError>;
}

#[derive(Clone)]
pub struct FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .map(UserProfile::from)
            .ok_or(FetchProfileError::UserNotFound)
    }
}
