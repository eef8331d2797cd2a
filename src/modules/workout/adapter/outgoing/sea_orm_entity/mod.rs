pub mod exercises;
pub mod set_descriptions;
pub mod workouts;
