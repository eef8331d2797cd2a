use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub workout_id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Restrict: a workout cannot be removed while exercises reference it.
    #[sea_orm(
        belongs_to = "super::workouts::Entity",
        from = "Column::WorkoutId",
        to = "super::workouts::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Workouts,

    #[sea_orm(has_many = "super::set_descriptions::Entity")]
    SetDescriptions,
}

impl Related<super::workouts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workouts.def()
    }
}

impl Related<super::set_descriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SetDescriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
