use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::WorkoutDetail;
use crate::modules::workout::application::ports::incoming::use_cases::{
    GetWorkoutDetailError, GetWorkoutDetailUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutQuery;

pub struct GetWorkoutDetailService<Q>
where
    Q: WorkoutQuery,
{
    query: Q,
}

impl<Q> GetWorkoutDetailService<Q>
where
    Q: WorkoutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetWorkoutDetailUseCase for GetWorkoutDetailService<Q>
where
    Q: WorkoutQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<WorkoutDetail, GetWorkoutDetailError> {
        self.query
            .get_detail(owner, workout_id)
            .await
            .map_err(GetWorkoutDetailError::from)
    }
}
