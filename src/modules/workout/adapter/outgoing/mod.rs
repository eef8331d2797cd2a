pub mod sea_orm_entity;
pub mod workout_query_postgres;
pub mod workout_repository_postgres;

pub use workout_query_postgres::WorkoutQueryPostgres;
pub use workout_repository_postgres::WorkoutRepositoryPostgres;
