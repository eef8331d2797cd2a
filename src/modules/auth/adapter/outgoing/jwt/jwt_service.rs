use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;

use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::{
    ActivationClaims, TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, ACTIVATION_TOKEN,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn sign<T: serde::Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn decode_claims<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e
            .kind()
        {
            ErrorKind::ExpiredSignature => {
                tracing::debug!("Token verification failed: Token expired");
                TokenError::TokenExpired
            }
            ErrorKind::ImmatureSignature => {
                tracing::warn!("Token verification failed: Token not yet valid");
                TokenError::TokenNotYetValid
            }
            ErrorKind::InvalidSignature => {
                tracing::error!("Security alert: Invalid token signature detected");
                TokenError::InvalidSignature
            }
            ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                tracing::error!("Security alert: Malformed or invalid algorithm token");
                TokenError::MalformedToken
            }
            ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                tracing::warn!("Token verification failed: Malformed token");
                TokenError::MalformedToken
            }
            _ => {
                tracing::warn!("Token verification failed: {:?}", e.kind());
                TokenError::MalformedToken
            }
        })?;

        Ok(decoded.claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        self.sign(&TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACCESS_TOKEN.to_string(),
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.decode_claims::<TokenClaims>(token)
    }

    fn generate_activation_token(&self, username: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.activation_token_expiry);

        self.sign(&ActivationClaims {
            sub: username.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACTIVATION_TOKEN.to_string(),
        })
    }

    fn verify_activation_token(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.decode_claims::<ActivationClaims>(token)?;

        if claims.token_type != ACTIVATION_TOKEN {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ACTIVATION_TOKEN,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ACTIVATION_TOKEN.to_string()));
        }

        Ok(claims.sub)
    }
}
