use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{Workout, WorkoutInput};
use crate::modules::workout::application::ports::incoming::use_cases::{
    UpdateWorkoutError, UpdateWorkoutUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepository;
use crate::shared::validation::ValidationErrors;

pub struct UpdateWorkoutService<R>
where
    R: WorkoutRepository,
{
    repository: R,
}

impl<R> UpdateWorkoutService<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateWorkoutUseCase for UpdateWorkoutService<R>
where
    R: WorkoutRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        input: WorkoutInput,
    ) -> Result<Workout, UpdateWorkoutError> {
        let mut errors = ValidationErrors::default();
        let fields = input
            .validate(&mut errors)
            .ok_or(UpdateWorkoutError::Validation(errors))?;

        self.repository
            .update_workout(owner, workout_id, fields)
            .await
            .map_err(UpdateWorkoutError::from)
    }
}
