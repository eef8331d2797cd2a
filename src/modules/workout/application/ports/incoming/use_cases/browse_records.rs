use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::workout::application::domain::entities::{Exercise, SetDescription, Workout};
use crate::modules::workout::application::ports::outgoing::WorkoutQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseRecordsError {
    #[error("Record not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<WorkoutQueryError> for BrowseRecordsError {
    fn from(err: WorkoutQueryError) -> Self {
        match err {
            WorkoutQueryError::NotFound => BrowseRecordsError::NotFound,
            WorkoutQueryError::DatabaseError(msg) => BrowseRecordsError::QueryFailed(msg),
        }
    }
}

/// Unauthenticated raw reads over every user's records.
#[async_trait]
pub trait BrowseRecordsUseCase: Send + Sync {
    async fn all_workouts(&self) -> Result<Vec<Workout>, BrowseRecordsError>;

    /// Keyed by exercise id.
    async fn exercise(&self, pk: Uuid) -> Result<Exercise, BrowseRecordsError>;

    /// Sets whose own id equals `id`, not those belonging to exercise `id`.
    async fn sets(&self, id: Uuid) -> Result<Vec<SetDescription>, BrowseRecordsError>;
}
