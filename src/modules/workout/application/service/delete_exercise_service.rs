use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::ports::incoming::use_cases::{
    DeleteExerciseError, DeleteExerciseUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepository;

pub struct DeleteExerciseService<R>
where
    R: WorkoutRepository,
{
    repository: R,
}

impl<R> DeleteExerciseService<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExerciseUseCase for DeleteExerciseService<R>
where
    R: WorkoutRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<(), DeleteExerciseError> {
        self.repository
            .delete_exercise(owner, workout_id, exercise_id)
            .await
            .map_err(DeleteExerciseError::from)
    }
}
