pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_091500_create_workouts_table;
mod m20250310_091600_create_exercises_table;
mod m20250310_091700_create_set_descriptions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_091500_create_workouts_table::Migration),
            Box::new(m20250310_091600_create_exercises_table::Migration),
            Box::new(m20250310_091700_create_set_descriptions_table::Migration),
        ]
    }
}
