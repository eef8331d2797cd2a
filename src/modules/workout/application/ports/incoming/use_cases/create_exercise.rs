use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{
    ExerciseInput, ExerciseWithSets, SetInput,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepositoryError;
use crate::shared::validation::ValidationErrors;

/// An exercise submitted together with its set rows.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateExerciseInput {
    #[serde(flatten)]
    pub exercise: ExerciseInput,
    #[serde(default)]
    pub sets: Vec<SetInput>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExerciseError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Workout not found")]
    WorkoutNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<WorkoutRepositoryError> for CreateExerciseError {
    fn from(err: WorkoutRepositoryError) -> Self {
        match err {
            WorkoutRepositoryError::NotFound => CreateExerciseError::WorkoutNotFound,
            other => CreateExerciseError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CreateExerciseUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        input: CreateExerciseInput,
    ) -> Result<ExerciseWithSets, CreateExerciseError>;
}
