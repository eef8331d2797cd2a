use std::sync::Arc;

use crate::modules::workout::application::ports::incoming::use_cases::{
    BrowseRecordsUseCase, CreateExerciseUseCase, CreateWorkoutUseCase, DeleteExerciseUseCase,
    DeleteWorkoutUseCase, GetWorkoutDetailUseCase, ListWorkoutsUseCase, ReplaceSetsUseCase,
    UpdateWorkoutUseCase,
};

#[derive(Clone)]
pub struct WorkoutUseCases {
    pub list: Arc<dyn ListWorkoutsUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetWorkoutDetailUseCase + Send + Sync>,
    pub create: Arc<dyn CreateWorkoutUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateWorkoutUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteWorkoutUseCase + Send + Sync>,
    pub create_exercise: Arc<dyn CreateExerciseUseCase + Send + Sync>,
    pub replace_sets: Arc<dyn ReplaceSetsUseCase + Send + Sync>,
    pub delete_exercise: Arc<dyn DeleteExerciseUseCase + Send + Sync>,
    pub browse: Arc<dyn BrowseRecordsUseCase + Send + Sync>,
}
