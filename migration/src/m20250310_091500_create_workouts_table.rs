use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create workouts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Workouts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workouts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Workouts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Workouts::Name).string_len(150).not_null())
                    // Supplied by the user so sessions can be backdated; no default.
                    .col(
                        ColumnDef::new(Workouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Workouts::Comment).text())
                    .foreign_key(&mut owner_fk())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Owner-scoped listing, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_workouts_user_created_at
                ON workouts (user_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_workouts_created_at
                ON workouts (created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workouts::Table).to_owned())
            .await
    }
}

/// Accounts are removed by the application's ordered delete; a raw user
/// delete must fail while workouts remain.
fn owner_fk() -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name("fk_workouts_user_id")
        .from(Workouts::Table, Workouts::UserId)
        .to(Users::Table, Users::Id)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Workouts {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
    Comment,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
