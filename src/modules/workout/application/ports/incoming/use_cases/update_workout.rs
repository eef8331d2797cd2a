use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{Workout, WorkoutInput};
use crate::modules::workout::application::ports::outgoing::WorkoutRepositoryError;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateWorkoutError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Workout not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<WorkoutRepositoryError> for UpdateWorkoutError {
    fn from(err: WorkoutRepositoryError) -> Self {
        match err {
            WorkoutRepositoryError::NotFound => UpdateWorkoutError::NotFound,
            other => UpdateWorkoutError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateWorkoutUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        input: WorkoutInput,
    ) -> Result<Workout, UpdateWorkoutError>;
}
