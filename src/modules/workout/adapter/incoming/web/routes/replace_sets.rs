use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::ExerciseWithSets;
use crate::modules::workout::application::ports::incoming::use_cases::{
    ReplaceSetsError, ReplaceSetsInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the sets of an exercise
///
/// Existing sets are discarded and the submitted rows stored in one step.
#[utoipa::path(
    put,
    path = "/workouts/{workout_id}/exercises/{exercise_id}/sets/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(
        ("workout_id" = Uuid, Path, description = "Owning workout"),
        ("exercise_id" = Uuid, Path, description = "Exercise whose sets are replaced"),
    ),
    request_body = ReplaceSetsInput,
    responses(
        (status = 200, description = "Sets replaced", body = inline(SuccessResponse<ExerciseWithSets>)),
        (status = 400, description = "Invalid set row; nothing changed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such exercise in a workout owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/workouts/{workout_id}/exercises/{exercise_id}/sets/")]
pub async fn replace_sets_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<ReplaceSetsInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (workout_id, exercise_id) = path.into_inner();

    match data
        .workout
        .replace_sets
        .execute(
            UserId::from(user.user_id),
            workout_id,
            exercise_id,
            req.into_inner(),
        )
        .await
    {
        Ok(exercise) => {
            info!(%exercise_id, sets = exercise.sets.len(), "Sets replaced");
            ApiResponse::success(exercise)
        }

        Err(ReplaceSetsError::Validation(errors)) => {
            warn!(%exercise_id, error = %errors, "Sets rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(ReplaceSetsError::NotFound) => {
            ApiResponse::not_found("EXERCISE_NOT_FOUND", "Exercise not found")
        }

        Err(ReplaceSetsError::RepositoryError(e)) => {
            error!(%exercise_id, error = %e, "Failed to replace sets");
            ApiResponse::internal_error()
        }
    }
}
