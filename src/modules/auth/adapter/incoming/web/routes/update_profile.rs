use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::ProfileFields;
use crate::auth::application::use_cases::fetch_profile::UserProfile;
use crate::auth::application::use_cases::update_profile::{UpdateProfileError, PROFILE_CHANGED};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

fn default_send_messages() -> bool {
    true
}

#[derive(Deserialize, ToSchema)]
pub struct ProfileChangeRequest {
    #[schema(example = "alice")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "alice@example.com")]
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default = "default_send_messages")]
    pub send_messages: bool,
}

impl From<ProfileChangeRequest> for ProfileFields {
    fn from(req: ProfileChangeRequest) -> Self {
        ProfileFields {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            send_messages: req.send_messages,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProfileChangedResponse {
    #[schema(example = "User info changed")]
    pub message: String,
    pub user: UserProfile,
}

/// Change account details
#[utoipa::path(
    put,
    path = "/accounts/profile/change/",
    tag = "accounts",
    security(("bearer_auth" = [])),
    request_body = ProfileChangeRequest,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileChangedResponse>)),
        (status = 400, description = "Field validation failed; nothing saved", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/accounts/profile/change/")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<ProfileChangeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = ProfileFields::from(req.into_inner());

    match data
        .update_profile_use_case
        .execute(user.user_id, fields)
        .await
    {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile changed");
            ApiResponse::success(ProfileChangedResponse {
                message: PROFILE_CHANGED.to_string(),
                user: profile,
            })
        }

        Err(UpdateProfileError::Validation(errors)) => {
            warn!(user_id = %user.user_id, error = %errors, "Profile change rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Profile change failed");
            ApiResponse::internal_error()
        }
    }
}
