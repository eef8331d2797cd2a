use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{
    ExerciseInput, WorkoutDetail, WorkoutInput,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepositoryError;
use crate::shared::validation::ValidationErrors;

/// A workout submitted together with its exercise rows.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateWorkoutInput {
    #[serde(flatten)]
    pub workout: WorkoutInput,
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateWorkoutError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<WorkoutRepositoryError> for CreateWorkoutError {
    fn from(err: WorkoutRepositoryError) -> Self {
        CreateWorkoutError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateWorkoutUseCase: Send + Sync {
    /// The workout is always owned by `owner`. Either the workout and every
    /// exercise row are stored, or nothing is.
    async fn execute(
        &self,
        owner: UserId,
        input: CreateWorkoutInput,
    ) -> Result<WorkoutDetail, CreateWorkoutError>;
}
