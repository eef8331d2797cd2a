use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::WorkoutDetail;
use crate::modules::workout::application::ports::outgoing::WorkoutQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetWorkoutDetailError {
    #[error("Workout not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<WorkoutQueryError> for GetWorkoutDetailError {
    fn from(err: WorkoutQueryError) -> Self {
        match err {
            WorkoutQueryError::NotFound => GetWorkoutDetailError::NotFound,
            WorkoutQueryError::DatabaseError(msg) => GetWorkoutDetailError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetWorkoutDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<WorkoutDetail, GetWorkoutDetailError>;
}
