use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{validate_sets, ExerciseWithSets};
use crate::modules::workout::application::ports::incoming::use_cases::{
    ReplaceSetsError, ReplaceSetsInput, ReplaceSetsUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepository;
use crate::shared::validation::ValidationErrors;

pub struct ReplaceSetsService<R>
where
    R: WorkoutRepository,
{
    repository: R,
}

impl<R> ReplaceSetsService<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplaceSetsUseCase for ReplaceSetsService<R>
where
    R: WorkoutRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
        input: ReplaceSetsInput,
    ) -> Result<ExerciseWithSets, ReplaceSetsError> {
        let mut errors = ValidationErrors::default();
        let sets = validate_sets(input.sets, &mut errors);

        if !errors.is_empty() {
            return Err(ReplaceSetsError::Validation(errors));
        }

        self.repository
            .replace_sets(owner, workout_id, exercise_id, sets)
            .await
            .map_err(ReplaceSetsError::from)
    }
}
