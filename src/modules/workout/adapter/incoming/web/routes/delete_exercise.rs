use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::EXERCISE_DELETED;
use crate::modules::workout::application::ports::incoming::use_cases::DeleteExerciseError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

/// Delete an exercise
///
/// Refused while the exercise still has sets.
#[utoipa::path(
    delete,
    path = "/workouts/{workout_id}/exercises/{exercise_id}/",
    tag = "workouts",
    security(("bearer_auth" = [])),
    params(
        ("workout_id" = Uuid, Path, description = "Owning workout"),
        ("exercise_id" = Uuid, Path, description = "Exercise to delete"),
    ),
    responses(
        (status = 200, description = "Exercise deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such exercise in a workout owned by the caller", body = ErrorResponse),
        (status = 409, description = "Sets still reference the exercise", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/workouts/{workout_id}/exercises/{exercise_id}/")]
pub async fn delete_exercise_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (workout_id, exercise_id) = path.into_inner();

    match data
        .workout
        .delete_exercise
        .execute(UserId::from(user.user_id), workout_id, exercise_id)
        .await
    {
        Ok(()) => {
            info!(%workout_id, %exercise_id, "Exercise deleted");
            ApiResponse::success(MessageResponse::new(EXERCISE_DELETED))
        }

        Err(DeleteExerciseError::NotFound) => {
            ApiResponse::not_found("EXERCISE_NOT_FOUND", "Exercise not found")
        }

        Err(DeleteExerciseError::Protected) => {
            warn!(%exercise_id, "Exercise still has sets");
            ApiResponse::conflict(
                "EXERCISE_PROTECTED",
                "Remove the exercise's sets before deleting it",
            )
        }

        Err(DeleteExerciseError::RepositoryError(e)) => {
            error!(%exercise_id, error = %e, "Failed to delete exercise");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::workout::application::ports::incoming::use_cases::DeleteExerciseUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    #[derive(Clone)]
    struct MockDeleteExercise {
        result: Result<(), DeleteExerciseError>,
    }

    #[async_trait]
    impl DeleteExerciseUseCase for MockDeleteExercise {
        async fn execute(
            &self,
            _owner: UserId,
            _workout_id: Uuid,
            _exercise_id: Uuid,
        ) -> Result<(), DeleteExerciseError> {
            self.result.clone()
        }
    }

    async fn delete_with(result: Result<(), DeleteExerciseError>) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_delete_exercise(MockDeleteExercise { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_exercise_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!(
                "/workouts/{}/exercises/{}/",
                Uuid::new_v4(),
                Uuid::new_v4()
            ))
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn deleted_exercise_reports_notice() {
        let (status, body) = delete_with(Ok(())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], EXERCISE_DELETED);
    }

    #[actix_web::test]
    async fn exercise_with_sets_is_conflict() {
        let (status, body) = delete_with(Err(DeleteExerciseError::Protected)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "EXERCISE_PROTECTED");
    }
}
