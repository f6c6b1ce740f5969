use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub task_id: i32,
    pub subproject_id: i32,
    pub task_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_complete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subprojects::Entity",
        from = "Column::SubprojectId",
        to = "super::subprojects::Column::SubprojectId",
        on_delete = "Cascade"
    )]
    Subproject,
}

impl Related<super::subprojects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subproject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
