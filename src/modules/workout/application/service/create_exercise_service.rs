use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{
    validate_sets, Exercise, ExerciseWithSets, SetDescription,
};
use crate::modules::workout::application::ports::incoming::use_cases::{
    CreateExerciseError, CreateExerciseInput, CreateExerciseUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepository;
use crate::shared::validation::ValidationErrors;

pub struct CreateExerciseService<R>
where
    R: WorkoutRepository,
{
    repository: R,
}

impl<R> CreateExerciseService<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExerciseUseCase for CreateExerciseService<R>
where
    R: WorkoutRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        workout_id: Uuid,
        input: CreateExerciseInput,
    ) -> Result<ExerciseWithSets, CreateExerciseError> {
        let mut errors = ValidationErrors::default();

        let name = input.exercise.validate("", &mut errors);
        let sets = validate_sets(input.sets, &mut errors);

        let name = match (name, errors.is_empty()) {
            (Some(name), true) => name,
            _ => return Err(CreateExerciseError::Validation(errors)),
        };

        let exercise = Exercise::create(workout_id, name);
        let sets = sets
            .into_iter()
            .map(|fields| SetDescription::create(exercise.id, fields))
            .collect();

        let created = self
            .repository
            .create_exercise_with_sets(owner, exercise, sets)
            .await?;

        info!(
            exercise_id = %created.id,
            workout_id = %workout_id,
            sets = created.sets.len(),
            "Exercise created"
        );

        Ok(created)
    }
}
