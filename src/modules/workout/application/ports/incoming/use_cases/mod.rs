mod browse_records;
mod create_exercise;
mod create_workout;
mod delete_exercise;
mod delete_workout;
mod get_workout_detail;
mod list_workouts;
mod replace_sets;
mod update_workout;

pub use browse_records::{BrowseRecordsError, BrowseRecordsUseCase};
pub use create_exercise::{CreateExerciseError, CreateExerciseInput, CreateExerciseUseCase};
pub use create_workout::{CreateWorkoutError, CreateWorkoutInput, CreateWorkoutUseCase};
pub use delete_exercise::{DeleteExerciseError, DeleteExerciseUseCase};
pub use delete_workout::{DeleteWorkoutError, DeleteWorkoutUseCase};
pub use get_workout_detail::{GetWorkoutDetailError, GetWorkoutDetailUseCase};
pub use list_workouts::{ListWorkoutsError, ListWorkoutsUseCase, WorkoutPage};
pub use replace_sets::{ReplaceSetsError, ReplaceSetsInput, ReplaceSetsUseCase};
pub use update_workout::{UpdateWorkoutError, UpdateWorkoutUseCase};
