mod create_exercise;
mod create_workout;
mod delete_exercise;
mod delete_workout;
mod get_workout;
mod list_workouts;
mod public_api;
mod replace_sets;
mod update_workout;

pub use create_exercise::*;
pub use create_workout::*;
pub use delete_exercise::*;
pub use delete_workout::*;
pub use get_workout::*;
pub use list_workouts::*;
pub use public_api::*;
pub use replace_sets::*;
pub use update_workout::*;
