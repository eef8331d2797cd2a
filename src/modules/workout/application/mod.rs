pub mod domain;
pub mod ports;
pub mod service;
pub mod workout_use_cases;

pub use workout_use_cases::WorkoutUseCases;
