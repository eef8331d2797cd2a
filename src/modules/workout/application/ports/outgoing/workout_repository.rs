use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, SetFields, Workout, WorkoutDetail, WorkoutFields,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkoutRepositoryError {
    #[error("Not found")]
    NotFound,

    /// Children still reference the row.
    #[error("Protected: {0}")]
    Protected(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write-side port. Every operation is scoped to `owner`; rows owned by
/// someone else behave as missing.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Workout and all its exercises in one transaction.
    async fn create_with_exercises(
        &self,
        workout: Workout,
        exercises: Vec<Exercise>,
    ) -> Result<WorkoutDetail, WorkoutRepositoryError>;

    /// Owner and id never change.
    async fn update_workout(
        &self,
        owner: UserId,
        workout_id: Uuid,
        fields: WorkoutFields,
    ) -> Result<Workout, WorkoutRepositoryError>;

    /// Refused with `Protected` while exercises exist.
    async fn delete_workout(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<(), WorkoutRepositoryError>;

    /// Exercise and all its sets in one transaction, under an owned workout.
    async fn create_exercise_with_sets(
        &self,
        owner: UserId,
        exercise: Exercise,
        sets: Vec<SetDescription>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError>;

    /// Swaps every set of the exercise for `sets` in one transaction.
    async fn replace_sets(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
        sets: Vec<SetFields>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError>;

    /// Refused with `Protected` while sets exist.
    async fn delete_exercise(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<(), WorkoutRepositoryError>;
}
