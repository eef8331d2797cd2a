use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid token")]
    InvalidToken,
}

/// Revoked-token store keyed by token digest.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Add a token to the blacklist until `expires_at`.
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
