use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::ports::outgoing::WorkoutRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteWorkoutError {
    #[error("Workout not found")]
    NotFound,

    #[error("Workout still has exercises")]
    Protected,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<WorkoutRepositoryError> for DeleteWorkoutError {
    fn from(err: WorkoutRepositoryError) -> Self {
        match err {
            WorkoutRepositoryError::NotFound => DeleteWorkoutError::NotFound,
            WorkoutRepositoryError::Protected(_) => DeleteWorkoutError::Protected,
            WorkoutRepositoryError::DatabaseError(msg) => DeleteWorkoutError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteWorkoutUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, workout_id: Uuid) -> Result<(), DeleteWorkoutError>;
}
