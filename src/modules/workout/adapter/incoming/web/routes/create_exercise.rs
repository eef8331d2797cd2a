use actix_web::{post, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::ExerciseWithSets;
use crate::modules::workout::application::ports::incoming::use_cases::{
    CreateExerciseError, CreateExerciseInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add an exercise with its sets to a workout
#[utoipa::path(
    post,
    path = "/workouts/{workout_id}/exercises/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(("workout_id" = Uuid, Path, description = "Owning workout")),
    request_body = CreateExerciseInput,
    responses(
        (status = 201, description = "Exercise and sets stored", body = inline(SuccessResponse<ExerciseWithSets>)),
        (status = 400, description = "Invalid exercise or set row; nothing stored", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such workout owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/workouts/{workout_id}/exercises/")]
pub async fn create_exercise_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateExerciseInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workout_id = path.into_inner();

    match data
        .workout
        .create_exercise
        .execute(UserId::from(user.user_id), workout_id, req.into_inner())
        .await
    {
        Ok(exercise) => {
            info!(%workout_id, exercise_id = %exercise.id, sets = exercise.sets.len(), "Exercise added");
            ApiResponse::created(exercise)
        }

        Err(CreateExerciseError::Validation(errors)) => {
            warn!(%workout_id, error = %errors, "Exercise rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(CreateExerciseError::WorkoutNotFound) => {
            ApiResponse::not_found("WORKOUT_NOT_FOUND", "Workout not found")
        }

        Err(CreateExerciseError::RepositoryError(e)) => {
            error!(%workout_id, error = %e, "Failed to store exercise");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::workout::application::domain::entities::{Exercise, SetDescription, SetFields};
    use crate::modules::workout::application::ports::incoming::use_cases::CreateExerciseUseCase;
    use crate::shared::api::custom_json_config;
    use crate::shared::validation::ValidationErrors;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    #[derive(Clone)]
    struct MockCreateExercise {
        fail: Option<CreateExerciseError>,
    }

    #[async_trait]
    impl CreateExerciseUseCase for MockCreateExercise {
        async fn execute(
            &self,
            _owner: UserId,
            workout_id: Uuid,
            input: CreateExerciseInput,
        ) -> Result<ExerciseWithSets, CreateExerciseError> {
            if let Some(err) = &self.fail {
                return Err(err.clone());
            }
            let exercise = Exercise::create(workout_id, input.exercise.name);
            let sets = input
                .sets
                .into_iter()
                .map(|s| {
                    SetDescription::create(
                        exercise.id,
                        SetFields {
                            number: s.number.unwrap_or(0) as i16,
                            weight: s.weight.unwrap_or(0.0),
                            repeats: s.repeats.unwrap_or(0) as i16,
                        },
                    )
                })
                .collect();
            Ok(ExerciseWithSets::new(exercise, sets))
        }
    }

    async fn post_as(mock: MockCreateExercise, workout_id: Uuid, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_create_exercise(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .app_data(web::Data::new(test_token_provider()))
                .service(create_exercise_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/workouts/{}/exercises/", workout_id))
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn stores_exercise_under_path_workout() {
        let workout_id = Uuid::new_v4();

        let (status, body) = post_as(
            MockCreateExercise { fail: None },
            workout_id,
            json!({
                "name": "Deadlift",
                "sets": [
                    { "number": 2, "weight": 140.0, "repeats": 3 },
                    { "number": 1, "weight": 120.0, "repeats": 5 }
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["workout_id"], workout_id.to_string());
        assert_eq!(body["data"]["sets"][0]["number"], 1);
        assert_eq!(body["data"]["sets"][1]["weight"], 140.0);
    }

    #[actix_web::test]
    async fn invalid_set_row_is_field_error() {
        let mock = MockCreateExercise {
            fail: Some(CreateExerciseError::Validation(ValidationErrors::single(
                "sets[0].repeats",
                "Ensure this value is greater than or equal to 0.",
            ))),
        };

        let (status, body) = post_as(mock, Uuid::new_v4(), json!({ "name": "Deadlift" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "sets[0].repeats");
    }

    #[actix_web::test]
    async fn foreign_workout_is_not_found() {
        let mock = MockCreateExercise {
            fail: Some(CreateExerciseError::WorkoutNotFound),
        };

        let (status, body) = post_as(mock, Uuid::new_v4(), json!({ "name": "Deadlift" })).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "WORKOUT_NOT_FOUND");
    }
}
