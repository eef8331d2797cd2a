use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::delete_account::{DeleteAccountError, USER_DELETED};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AccountDeletedResponse {
    #[schema(example = "User deleted")]
    pub message: String,
    pub workouts_removed: u64,
    pub exercises_removed: u64,
    pub sets_removed: u64,
}

/// Delete account
///
/// Logs the caller out and removes the account with every workout it owns.
#[utoipa::path(
    delete,
    path = "/accounts/profile/delete/",
    tag = "accounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account removed", body = inline(SuccessResponse<AccountDeletedResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Removal failed; nothing was deleted", body = ErrorResponse),
    )
)]
#[delete("/accounts/profile/delete/")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_account_use_case
        .execute(user.user_id, &user.token)
        .await
    {
        Ok(removal) => {
            info!(user_id = %user.user_id, workouts = removal.workouts, "Account deleted");
            ApiResponse::success(AccountDeletedResponse {
                message: USER_DELETED.to_string(),
                workouts_removed: removal.workouts,
                exercises_removed: removal.exercises,
                sets_removed: removal.sets,
            })
        }

        Err(DeleteAccountError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteAccountError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
