use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{ProfileFields, User};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    AccountRemoval, UserRepository, UserRepositoryError,
};
use crate::modules::workout::adapter::outgoing::sea_orm_entity::{
    exercises, set_descriptions, workouts,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Column, Entity as UserEntity};
use super::user_query_postgres::model_to_user;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn remove_account(
        txn: &DatabaseTransaction,
        user_id: Uuid,
    ) -> Result<AccountRemoval, UserRepositoryError> {
        let mut removal = AccountRemoval::default();

        let workout_ids: Vec<Uuid> = workouts::Entity::find()
            .select_only()
            .column(workouts::Column::Id)
            .filter(workouts::Column::UserId.eq(user_id))
            .into_tuple()
            .all(txn)
            .await
            .map_err(map_db_err)?;

        if !workout_ids.is_empty() {
            let exercise_ids: Vec<Uuid> = exercises::Entity::find()
                .select_only()
                .column(exercises::Column::Id)
                .filter(exercises::Column::WorkoutId.is_in(workout_ids.clone()))
                .into_tuple()
                .all(txn)
                .await
                .map_err(map_db_err)?;

            if !exercise_ids.is_empty() {
                removal.sets = set_descriptions::Entity::delete_many()
                    .filter(set_descriptions::Column::ExerciseId.is_in(exercise_ids))
                    .exec(txn)
                    .await
                    .map_err(map_db_err)?
                    .rows_affected;

                removal.exercises = exercises::Entity::delete_many()
                    .filter(exercises::Column::WorkoutId.is_in(workout_ids.clone()))
                    .exec(txn)
                    .await
                    .map_err(map_db_err)?
                    .rows_affected;
            }

            removal.workouts = workouts::Entity::delete_many()
                .filter(workouts::Column::UserId.eq(user_id))
                .exec(txn)
                .await
                .map_err(map_db_err)?
                .rows_affected;
        }

        let deleted = UserEntity::delete_by_id(user_id)
            .exec(txn)
            .await
            .map_err(map_db_err)?;

        if deleted.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(removal)
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

/// Writes that touch `username` or `email` can hit the unique indexes.
fn map_write_err(e: DbErr) -> UserRepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return UserRepositoryError::UserAlreadyExists;
    }

    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UserAlreadyExists;
    }

    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            is_active: Set(user.is_active),
            is_activated: Set(user.is_activated),
            send_messages: Set(user.send_messages),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_write_err)?;

        Ok(model_to_user(inserted))
    }

    async fn activate_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(true))
            .col_expr(Column::IsActivated, Expr::value(true))
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        profile: ProfileFields,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.username = Set(profile.username);
        active_user.email = Set(profile.email);
        active_user.first_name = Set(profile.first_name);
        active_user.last_name = Set(profile.last_name);
        active_user.send_messages = Set(profile.send_messages);

        let updated = active_user.update(&*self.db).await.map_err(map_write_err)?;

        Ok(model_to_user(updated))
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(Column::PasswordHash, Expr::value(new_password_hash))
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn delete_user_cascade(
        &self,
        user_id: Uuid,
    ) -> Result<AccountRemoval, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::remove_account(&txn, user_id).await {
            Ok(removal) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(removal)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
