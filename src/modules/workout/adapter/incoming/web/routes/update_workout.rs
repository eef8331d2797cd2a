use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{Workout, WorkoutInput};
use crate::modules::workout::application::ports::incoming::use_cases::UpdateWorkoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit a workout
///
/// Replaces name, timestamp and comment. Ownership never changes.
#[utoipa::path(
    put,
    path = "/workouts/{id}/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Workout id")),
    request_body = WorkoutInput,
    responses(
        (status = 200, description = "Workout updated", body = inline(SuccessResponse<Workout>)),
        (status = 400, description = "Invalid field; nothing changed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such workout owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/workouts/{id}/")]
pub async fn update_workout_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<WorkoutInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workout_id = path.into_inner();

    match data
        .workout
        .update
        .execute(UserId::from(user.user_id), workout_id, req.into_inner())
        .await
    {
        Ok(workout) => {
            info!(%workout_id, "Workout updated");
            ApiResponse::success(workout)
        }

        Err(UpdateWorkoutError::Validation(errors)) => {
            warn!(%workout_id, error = %errors, "Workout update rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(UpdateWorkoutError::NotFound) => {
            ApiResponse::not_found("WORKOUT_NOT_FOUND", "Workout not found")
        }

        Err(UpdateWorkoutError::RepositoryError(e)) => {
            error!(%workout_id, error = %e, "Failed to update workout");
            ApiResponse::internal_error()
        }
    }
}
