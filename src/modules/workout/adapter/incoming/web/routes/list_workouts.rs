use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::ports::incoming::use_cases::{
    ListWorkoutsError, WorkoutPage,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListWorkoutsQuery {
    /// Matches name or comment, case-insensitive
    pub keyword: Option<String>,
    /// 1-based; invalid values fall back to 1, values past the end to the last page
    pub page: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List own workouts
///
/// Newest first, optionally filtered by keyword.
#[utoipa::path(
    get,
    path = "/workouts/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(ListWorkoutsQuery),
    responses(
        (status = 200, description = "One page of workouts", body = inline(SuccessResponse<WorkoutPage>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/workouts/")]
pub async fn list_workouts_handler(
    user: AuthenticatedUser,
    query: web::Query<ListWorkoutsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let query = query.into_inner();

    match data
        .workout
        .list
        .execute(owner, query.keyword, query.page)
        .await
    {
        Ok(page) => ApiResponse::success(page),

        Err(ListWorkoutsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list workouts");
            ApiResponse::internal_error()
        }
    }
}
