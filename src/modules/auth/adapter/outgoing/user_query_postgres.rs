use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_user(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        is_active: model.is_active,
        is_activated: model.is_activated,
        send_messages: model.send_messages,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(model_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(model_to_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(model_to_user))
    }
}
