use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::WORKOUT_DELETED;
use crate::modules::workout::application::ports::incoming::use_cases::DeleteWorkoutError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

/// Delete a workout
///
/// Refused while the workout still has exercises.
#[utoipa::path(
    delete,
    path = "/workouts/{id}/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Workout id")),
    responses(
        (status = 200, description = "Workout deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such workout owned by the caller", body = ErrorResponse),
        (status = 409, description = "Exercises still reference the workout", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/workouts/{id}/")]
pub async fn delete_workout_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workout_id = path.into_inner();

    match data
        .workout
        .delete
        .execute(UserId::from(user.user_id), workout_id)
        .await
    {
        Ok(()) => {
            info!(%workout_id, "Workout deleted");
            ApiResponse::success(MessageResponse::new(WORKOUT_DELETED))
        }

        Err(DeleteWorkoutError::NotFound) => {
            ApiResponse::not_found("WORKOUT_NOT_FOUND", "Workout not found")
        }

        Err(DeleteWorkoutError::Protected) => {
            warn!(%workout_id, "Workout still has exercises");
            ApiResponse::conflict(
                "WORKOUT_PROTECTED",
                "Remove the workout's exercises before deleting it",
            )
        }

        Err(DeleteWorkoutError::RepositoryError(e)) => {
            error!(%workout_id, error = %e, "Failed to delete workout");
            ApiResponse::internal_error()
        }
    }
}
