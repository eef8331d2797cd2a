use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{Exercise, Workout, WorkoutDetail};
use crate::modules::workout::application::ports::incoming::use_cases::{
    CreateWorkoutError, CreateWorkoutInput, CreateWorkoutUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepository;
use crate::shared::validation::ValidationErrors;

pub struct CreateWorkoutService<R>
where
    R: WorkoutRepository,
{
    repository: R,
}

impl<R> CreateWorkoutService<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateWorkoutUseCase for CreateWorkoutService<R>
where
    R: WorkoutRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: CreateWorkoutInput,
    ) -> Result<WorkoutDetail, CreateWorkoutError> {
        let mut errors = ValidationErrors::default();

        let fields = input.workout.validate(&mut errors);
        let names: Vec<String> = input
            .exercises
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| row.validate(&format!("exercises[{i}]"), &mut errors))
            .collect();

        let fields = match (fields, errors.is_empty()) {
            (Some(fields), true) => fields,
            _ => return Err(CreateWorkoutError::Validation(errors)),
        };

        let workout = Workout::create(owner, fields);
        let exercises = names
            .into_iter()
            .map(|name| Exercise::create(workout.id, name))
            .collect();

        let detail = self
            .repository
            .create_with_exercises(workout, exercises)
            .await?;

        info!(
            workout_id = %detail.workout.id,
            exercises = detail.exercises.len(),
            "Workout created"
        );

        Ok(detail)
    }
}
