use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::Workout;
use crate::modules::workout::application::domain::pagination::PageWindow;
use crate::modules::workout::application::ports::outgoing::WorkoutQueryError;

/// One page of the caller's workouts, echoing the inputs that produced it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkoutPage {
    pub items: Vec<Workout>,
    #[schema(example = "legs")]
    pub keyword: Option<String>,
    #[serde(flatten)]
    pub window: PageWindow,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListWorkoutsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<WorkoutQueryError> for ListWorkoutsError {
    fn from(err: WorkoutQueryError) -> Self {
        match err {
            WorkoutQueryError::DatabaseError(msg) => ListWorkoutsError::QueryFailed(msg),
            WorkoutQueryError::NotFound => ListWorkoutsError::QueryFailed("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListWorkoutsUseCase: Send + Sync {
    /// `page` is the raw query value; bad values fall back to page 1.
    async fn execute(
        &self,
        owner: UserId,
        keyword: Option<String>,
        page: Option<String>,
    ) -> Result<WorkoutPage, ListWorkoutsError>;
}
