use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::workout::application::domain::entities::{Exercise, SetDescription, Workout};
use crate::modules::workout::application::ports::incoming::use_cases::BrowseRecordsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Record DTOs (every column, foreign keys as ids)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutRecord {
    pub id: Uuid,
    /// Owning user id
    pub sportsman_name: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub comment: Option<String>,
}

impl From<Workout> for WorkoutRecord {
    fn from(w: Workout) -> Self {
        Self {
            id: w.id,
            sportsman_name: w.owner.into(),
            name: w.name,
            created_at: w.created_at,
            comment: w.comment,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub workout: Uuid,
    pub name: String,
}

impl From<Exercise> for ExerciseRecord {
    fn from(e: Exercise) -> Self {
        Self {
            id: e.id,
            workout: e.workout_id,
            name: e.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SetDescriptionRecord {
    pub id: Uuid,
    pub exercise: Uuid,
    pub number: i16,
    pub weight: f64,
    pub repeats: i16,
}

impl From<SetDescription> for SetDescriptionRecord {
    fn from(s: SetDescription) -> Self {
        Self {
            id: s.id,
            exercise: s.exercise_id,
            number: s.number,
            weight: s.weight,
            repeats: s.repeats,
        }
    }
}

fn browse_failed(err: BrowseRecordsError) -> HttpResponse {
    match err {
        BrowseRecordsError::NotFound => ApiResponse::not_found("NOT_FOUND", "Not found"),
        BrowseRecordsError::QueryFailed(msg) => {
            error!(error = %msg, "Record browse failed");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers (mounted under /api)
// ──────────────────────────────────────────────────────────
//

/// Every workout of every user
#[utoipa::path(
    get,
    path = "/api/workouts/",
    tag = "records",
    responses(
        (status = 200, description = "All workouts", body = Vec<WorkoutRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/workouts/")]
pub async fn list_workout_records_handler(data: web::Data<AppState>) -> impl Responder {
    match data.workout.browse.all_workouts().await {
        Ok(workouts) => HttpResponse::Ok().json(
            workouts
                .into_iter()
                .map(WorkoutRecord::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => browse_failed(e),
    }
}

/// Exercise record by primary key
///
/// The path segment is an exercise id even though it sits under `/workouts/`.
#[utoipa::path(
    get,
    path = "/api/workouts/{pk}/",
    tag = "records",
    params(("pk" = Uuid, Path, description = "Exercise id")),
    responses(
        (status = 200, description = "Exercise found", body = ExerciseRecord),
        (status = 404, description = "No exercise with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/workouts/{pk}/")]
pub async fn exercise_record_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.workout.browse.exercise(path.into_inner()).await {
        Ok(exercise) => HttpResponse::Ok().json(ExerciseRecord::from(exercise)),
        Err(e) => browse_failed(e),
    }
}

/// Set records whose own id matches `exercise_id`
///
/// `workout_pk` is not used for filtering.
#[utoipa::path(
    get,
    path = "/api/workouts/{workout_pk}/{exercise_id}/",
    tag = "records",
    params(
        ("workout_pk" = Uuid, Path, description = "Ignored"),
        ("exercise_id" = Uuid, Path, description = "Matched against the set id"),
    ),
    responses(
        (status = 200, description = "Matching sets, possibly empty", body = Vec<SetDescriptionRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/workouts/{workout_pk}/{exercise_id}/")]
pub async fn set_records_handler(
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (_workout_pk, exercise_id) = path.into_inner();

    match data.workout.browse.sets(exercise_id).await {
        Ok(sets) => HttpResponse::Ok().json(
            sets.into_iter()
                .map(SetDescriptionRecord::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => browse_failed(e),
    }
}
