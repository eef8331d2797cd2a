use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::helpers::hash_token;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::auth::application::ports::outgoing::TokenRepository;
use crate::shared::api::ApiResponse;

/// Caller identified by a valid, unrevoked access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    /// Raw bearer token, kept so logout can revoke it.
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned();
        let blacklist = req
            .app_data::<web::Data<Arc<dyn TokenRepository + Send + Sync>>>()
            .cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let Some(token_provider) = token_provider else {
                tracing::error!("Token provider is not registered");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            let claims = token_provider.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            })?;

            if claims.token_type != ACCESS_TOKEN {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            if let Some(blacklist) = blacklist {
                match blacklist.is_token_blacklisted(&hash_token(&token)).await {
                    Ok(false) => {}
                    Ok(true) => {
                        return Err(create_api_error(ApiResponse::unauthorized(
                            "TOKEN_REVOKED",
                            "Token has been revoked",
                        )));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Blacklist lookup failed");
                        return Err(create_api_error(ApiResponse::internal_error()));
                    }
                }
            }

            Ok(AuthenticatedUser {
                user_id: claims.sub,
                token,
            })
        })
    }
}

/// Token from an `Authorization: Bearer` header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
