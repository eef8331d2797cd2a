use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::activate_user::{ActivateUserError, ActivationOutcome};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ActivationResponse {
    pub outcome: ActivationOutcome,
    #[schema(example = "Your account has been activated")]
    pub message: String,
}

impl From<ActivationOutcome> for ActivationResponse {
    fn from(outcome: ActivationOutcome) -> Self {
        let message = match outcome {
            ActivationOutcome::Activated => "Your account has been activated",
            ActivationOutcome::AlreadyActivated => "Your account is already activated",
        };

        Self {
            outcome,
            message: message.to_string(),
        }
    }
}

/// Activate an account
///
/// Follows the signed link mailed at registration. Repeating it is harmless.
#[utoipa::path(
    get,
    path = "/account/register/activate/{token}/",
    tag = "accounts",
    params(("token" = String, Path, description = "Signed activation token")),
    responses(
        (
            status = 200,
            description = "Activated, or already active",
            body = inline(SuccessResponse<ActivationResponse>),
            example = json!({
                "success": true,
                "data": { "outcome": "activated", "message": "Your account has been activated" }
            })
        ),
        (
            status = 400,
            description = "Token signature is invalid or the token expired",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "BAD_SIGNATURE", "message": "Activation link is invalid or expired" }
            })
        ),
        (status = 404, description = "Signed username does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/account/register/activate/{token}/")]
pub async fn activate_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = path.into_inner();

    match data.activate_user_use_case.execute(&token).await {
        Ok(outcome) => {
            info!(outcome = ?outcome, "Activation link processed");
            ApiResponse::success(ActivationResponse::from(outcome))
        }

        Err(ActivateUserError::BadSignature) => {
            warn!("Activation link with bad signature");
            ApiResponse::bad_request("BAD_SIGNATURE", "Activation link is invalid or expired")
        }

        Err(ActivateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ActivateUserError::RepositoryError(e)) => {
            error!(error = %e, "Account activation failed");
            ApiResponse::internal_error()
        }
    }
}
