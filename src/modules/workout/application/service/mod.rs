pub mod browse_records_service;
pub mod create_exercise_service;
pub mod create_workout_service;
pub mod delete_exercise_service;
pub mod delete_workout_service;
pub mod get_workout_detail_service;
pub mod list_workouts_service;
pub mod replace_sets_service;
pub mod update_workout_service;

pub use browse_records_service::BrowseRecordsService;
pub use create_exercise_service::CreateExerciseService;
pub use create_workout_service::CreateWorkoutService;
pub use delete_exercise_service::DeleteExerciseService;
pub use delete_workout_service::DeleteWorkoutService;
pub use get_workout_detail_service::GetWorkoutDetailService;
pub use list_workouts_service::ListWorkoutsService;
pub use replace_sets_service::ReplaceSetsService;
pub use update_workout_service::UpdateWorkoutService;
