use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Exercises::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Exercises::WorkoutId).uuid().not_null())
                    .col(ColumnDef::new(Exercises::Name).string_len(150).not_null())
                    // A workout cannot be removed while exercises still point at it.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercises_workout_id")
                            .from(Exercises::Table, Exercises::WorkoutId)
                            .to(Workouts::Table, Workouts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_exercises_workout_id
                ON exercises (workout_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Exercises {
    Table,
    Id,
    WorkoutId,
    Name,
}

#[derive(DeriveIden)]
enum Workouts {
    Table,
    Id,
}
