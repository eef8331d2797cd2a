use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::workout::application::domain::entities::{Exercise, SetDescription, Workout};
use crate::modules::workout::application::ports::incoming::use_cases::{
    BrowseRecordsError, BrowseRecordsUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutQuery;

pub struct BrowseRecordsService<Q>
where
    Q: WorkoutQuery,
{
    query: Q,
}

impl<Q> BrowseRecordsService<Q>
where
    Q: WorkoutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> BrowseRecordsUseCase for BrowseRecordsService<Q>
where
    Q: WorkoutQuery + Send + Sync,
{
    async fn all_workouts(&self) -> Result<Vec<Workout>, BrowseRecordsError> {
        Ok(self.query.list_all_workouts().await?)
    }

    async fn exercise(&self, pk: Uuid) -> Result<Exercise, BrowseRecordsError> {
        Ok(self.query.find_exercise_record(pk).await?)
    }

    async fn sets(&self, id: Uuid) -> Result<Vec<SetDescription>, BrowseRecordsError> {
        Ok(self.query.find_set_records(id).await?)
    }
}
