use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACCESS_TOKEN: &str = "access";
pub const ACTIVATION_TOKEN: &str = "activation";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims of a bearer access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: String,
}

/// Claims of a signed activation link; the subject is the username.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivationClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub token_type: String,
}

/// Signing service for bearer tokens and activation links.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    fn generate_activation_token(&self, username: &str) -> Result<String, TokenError>;
    /// Returns the username the token was issued for.
    fn verify_activation_token(&self, token: &str) -> Result<String, TokenError>;
}
