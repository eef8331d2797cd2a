use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, Workout, WorkoutDetail,
};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutListFilter {
    /// Case-insensitive substring of name or comment.
    pub keyword: Option<String>,
}

impl WorkoutListFilter {
    /// Blank keywords do not filter; anything else is matched as given.
    pub fn keyword(raw: Option<&str>) -> Self {
        Self {
            keyword: raw
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkoutQueryError {
    #[error("Workout not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait WorkoutQuery: Send + Sync {
    async fn count_owned(
        &self,
        owner: UserId,
        filter: &WorkoutListFilter,
    ) -> Result<u64, WorkoutQueryError>;

    /// Owner-scoped, newest `created_at` first.
    async fn list_owned(
        &self,
        owner: UserId,
        filter: &WorkoutListFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Workout>, WorkoutQueryError>;

    /// Workout with every exercise and set below it. A workout owned by
    /// someone else is `NotFound`.
    async fn get_detail(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<WorkoutDetail, WorkoutQueryError>;

    async fn get_exercise(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<ExerciseWithSets, WorkoutQueryError>;

    // Unscoped reads backing the public API.

    async fn list_all_workouts(&self) -> Result<Vec<Workout>, WorkoutQueryError>;

    async fn find_exercise_record(&self, pk: Uuid) -> Result<Exercise, WorkoutQueryError>;

    /// Sets whose own id equals `id`.
    async fn find_set_records(&self, id: Uuid) -> Result<Vec<SetDescription>, WorkoutQueryError>;
}
