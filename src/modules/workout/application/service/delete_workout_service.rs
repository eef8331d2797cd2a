use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::ports::incoming::use_cases::{
    DeleteWorkoutError, DeleteWorkoutUseCase,
};
use crate::modules::workout::application::ports::outgoing::WorkoutRepository;

pub struct DeleteWorkoutService<R>
where
    R: WorkoutRepository,
{
    repository: R,
}

impl<R> DeleteWorkoutService<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteWorkoutUseCase for DeleteWorkoutService<R>
where
    R: WorkoutRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, workout_id: Uuid) -> Result<(), DeleteWorkoutError> {
        self.repository
            .delete_workout(owner, workout_id)
            .await
            .map_err(DeleteWorkoutError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::workout::application::domain::entities::Exercise;
    use crate::tests::support::in_memory_workouts::{sample_workout, InMemoryWorkouts};

    #[tokio::test]
    async fn empty_workout_is_removed() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryWorkouts::default();
        let workout = sample_workout(owner, "Legs", 10);
        store.insert_workout(workout.clone());

        DeleteWorkoutService::new(store.clone())
            .execute(owner, workout.id)
            .await
            .unwrap();

        assert_eq!(store.workout_count(), 0);
    }

    #[tokio::test]
    async fn workout_with_exercises_is_protected() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryWorkouts::default();
        let workout = sample_workout(owner, "Legs", 10);
        store.insert_workout(workout.clone());
        store.insert_exercise(Exercise::create(workout.id, "Squat".to_string()));

        let err = DeleteWorkoutService::new(store.clone())
            .execute(owner, workout.id)
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteWorkoutError::Protected));
        assert_eq!(store.workout_count(), 1);
    }

    #[tokio::test]
    async fn foreign_workout_is_not_found() {
        let store = InMemoryWorkouts::default();
        let workout = sample_workout(UserId::from(Uuid::new_v4()), "Legs", 10);
        store.insert_workout(workout.clone());

        let err = DeleteWorkoutService::new(store.clone())
            .execute(UserId::from(Uuid::new_v4()), workout.id)
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteWorkoutError::NotFound));
        assert_eq!(store.workout_count(), 1);
    }
}
