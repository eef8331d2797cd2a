use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use uuid::Uuid;

/// Redis-backed blacklist of revoked access tokens.
///
/// One key per revoked token:
/// ```text
/// workouts:blacklist:token:{token_hash} -> "{user_id}"
/// ```
/// The key lives exactly as long as the token would have, so Redis TTL
/// handles cleanup.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("workouts:blacklist:token:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    /// ```text
    /// SET    workouts:blacklist:token:{hash} "{user_id}"
    /// EXPIRE workouts:blacklist:token:{hash} <ttl>
    /// ```
    /// Sent as one `MULTI/EXEC` block so a key never exists without its TTL.
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenRepositoryError::InvalidToken);
        }

        let token_key = Self::token_key(&token_hash);
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&token_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }
}
