use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{WorkoutDetail, WORKOUT_ADDED};
use crate::modules::workout::application::ports::incoming::use_cases::{
    CreateWorkoutError, CreateWorkoutInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct WorkoutAddedResponse {
    #[schema(example = "Workout added successfully")]
    pub message: String,
    pub workout: WorkoutDetail,
}

/// Add a workout with its exercises
///
/// The workout and all exercise rows are stored together or not at all.
#[utoipa::path(
    post,
    path = "/workouts/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    request_body = CreateWorkoutInput,
    responses(
        (status = 201, description = "Workout stored", body = inline(SuccessResponse<WorkoutAddedResponse>)),
        (status = 400, description = "A workout or exercise field is invalid; nothing stored", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/workouts/")]
pub async fn create_workout_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateWorkoutInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.workout.create.execute(owner, req.into_inner()).await {
        Ok(workout) => {
            info!(user_id = %user.user_id, workout_id = %workout.workout.id, "Workout added");
            ApiResponse::created(WorkoutAddedResponse {
                message: WORKOUT_ADDED.to_string(),
                workout,
            })
        }

        Err(CreateWorkoutError::Validation(errors)) => {
            warn!(user_id = %user.user_id, error = %errors, "Workout rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(CreateWorkoutError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to store workout");
            ApiResponse::internal_error()
        }
    }
}
