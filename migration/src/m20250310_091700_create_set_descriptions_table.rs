use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetDescriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetDescriptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SetDescriptions::ExerciseId).uuid().not_null())
                    .col(
                        ColumnDef::new(SetDescriptions::Number)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(SetDescriptions::Number).gte(0)),
                    )
                    .col(ColumnDef::new(SetDescriptions::Weight).double().not_null())
                    .col(
                        ColumnDef::new(SetDescriptions::Repeats)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(SetDescriptions::Repeats).gte(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_set_descriptions_exercise_id")
                            .from(SetDescriptions::Table, SetDescriptions::ExerciseId)
                            .to(Exercises::Table, Exercises::Id)
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
                CREATE INDEX IF NOT EXISTS idx_set_descriptions_exercise_number
                ON set_descriptions (exercise_id, number);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetDescriptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SetDescriptions {
    Table,
    Id,
    ExerciseId,
    Number,
    Weight,
    Repeats,
}

#[derive(DeriveIden)]
enum Exercises {
    Table,
    Id,
}
