use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_activated: bool,
    pub send_messages: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::workout::adapter::outgoing::sea_orm_entity::workouts::Entity"
    )]
    Workouts,
}

impl Related<crate::modules::workout::adapter::outgoing::sea_orm_entity::workouts::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Workouts.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }
        #[cfg(not(feature = "no_db_triggers"))]
        let _ = insert;

        Ok(self)
    }
}
