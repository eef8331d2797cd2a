use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Current account
#[utoipa::path(
    get,
    path = "/accounts/profile/",
    tag = "accounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the caller", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/accounts/profile/")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
