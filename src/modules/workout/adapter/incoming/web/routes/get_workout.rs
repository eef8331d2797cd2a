use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::WorkoutDetail;
use crate::modules::workout::application::ports::incoming::use_cases::GetWorkoutDetailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Workout detail
///
/// The workout with its exercises and their sets.
#[utoipa::path(
    get,
    path = "/workouts/{id}/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Workout id")),
    responses(
        (status = 200, description = "Workout found", body = inline(SuccessResponse<WorkoutDetail>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such workout owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/workouts/{id}/")]
pub async fn get_workout_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workout_id = path.into_inner();

    match data
        .workout
        .get_detail
        .execute(UserId::from(user.user_id), workout_id)
        .await
    {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetWorkoutDetailError::NotFound) => {
            ApiResponse::not_found("WORKOUT_NOT_FOUND", "Workout not found")
        }

        Err(GetWorkoutDetailError::QueryFailed(msg)) => {
            error!(%workout_id, error = %msg, "Failed to load workout");
            ApiResponse::internal_error()
        }
    }
}
