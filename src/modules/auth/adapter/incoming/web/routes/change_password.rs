use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput, PASSWORD_CHANGED,
};
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PasswordChangeRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password1: String,
    #[serde(default)]
    pub new_password2: String,
}

/// Change password
#[utoipa::path(
    post,
    path = "/accounts/password/change/",
    tag = "accounts",
    security(("bearer_auth" = [])),
    request_body = PasswordChangeRequest,
    responses(
        (
            status = 200,
            description = "Password changed",
            body = inline(SuccessResponse<MessageResponse>),
            example = json!({ "success": true, "data": { "message": "Password changed" } })
        ),
        (status = 400, description = "Old password wrong or new password rejected", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/accounts/password/change/")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<PasswordChangeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = ChangePasswordInput {
        old_password: req.old_password,
        new_password1: req.new_password1,
        new_password2: req.new_password2,
    };

    match data
        .change_password_use_case
        .execute(user.user_id, input)
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new(PASSWORD_CHANGED)),

        Err(ChangePasswordError::Validation(errors)) => {
            warn!(user_id = %user.user_id, "Password change rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
