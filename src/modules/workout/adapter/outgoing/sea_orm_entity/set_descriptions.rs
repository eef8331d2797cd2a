use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "set_descriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub exercise_id: Uuid,

    pub number: i16,

    #[sea_orm(column_type = "Double")]
    pub weight: f64,

    pub repeats: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exercises::Entity",
        from = "Column::ExerciseId",
        to = "super::exercises::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Exercises,
}

impl Related<super::exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
