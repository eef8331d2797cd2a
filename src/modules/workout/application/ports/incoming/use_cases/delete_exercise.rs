use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::ports::outgoing::WorkoutRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteExerciseError {
    #[error("Exercise not found")]
    NotFound,

    #[error("Exercise still has sets")]
    Protected,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<WorkoutRepositoryError> for DeleteExerciseError {
    fn from(err: WorkoutRepositoryError) -> Self {
        match err {
            WorkoutRepositoryError::NotFound => DeleteExerciseError::NotFound,
            WorkoutRepositoryError::Protected(_) => DeleteExerciseError::Protected,
            WorkoutRepositoryError::DatabaseError(msg) => {
                DeleteExerciseError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteExerciseUseCase: Send + Sync {
    /// The exercise must belong to `workout_id`, which must be owned.
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<(), DeleteExerciseError>;
}
