pub mod workout_query;
pub mod workout_repository;

pub use workout_query::{WorkoutListFilter, WorkoutQuery, WorkoutQueryError};
pub use workout_repository::{WorkoutRepository, WorkoutRepositoryError};
