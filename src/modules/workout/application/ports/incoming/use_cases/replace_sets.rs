use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{ExerciseWithSets, SetInput};
use crate::modules::workout::application::ports::outgoing::WorkoutRepositoryError;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReplaceSetsInput {
    #[serde(default)]
    pub sets: Vec<SetInput>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplaceSetsError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Exercise not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<WorkoutRepositoryError> for ReplaceSetsError {
    fn from(err: WorkoutRepositoryError) -> Self {
        match err {
            WorkoutRepositoryError::NotFound => ReplaceSetsError::NotFound,
            other => ReplaceSetsError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ReplaceSetsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
        input: ReplaceSetsInput,
    ) -> Result<ExerciseWithSets, ReplaceSetsError>;
}
