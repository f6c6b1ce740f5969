use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::PortalError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subprojects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub subproject_id: i32,
    pub project_id: i32,
    pub subproject_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub total_estimated_cost: f64,
    pub total_actual_cost: f64,
    pub total_assigned_employees: i32,
    pub is_complete: bool,
    pub subproject_description: Option<String>,
    pub hours_allocated: i32,
    pub priority: String,
    pub total_actual_hours: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::ProjectId",
        on_delete = "Cascade"
    )]
    Project,
    #[sea_orm(has_many = "super::tasks::Entity")]
    Tasks,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Hours spent over hours allocated, as a percentage. A subproject with
    /// no allocation reports 0 rather than dividing by zero.
    pub fn progress_percentage(&self) -> f64 {
        if self.hours_allocated == 0 {
            return 0.0;
        }
        f64::from(self.total_actual_hours) / f64::from(self.hours_allocated) * 100.0
    }

    pub fn priority(&self) -> Result<Priority, PortalError> {
        self.priority.parse()
    }
}

/// Ordinal urgency attached to a subproject, persisted as its uppercase name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(PortalError::Validation(format!(
                "invalid priority \"{}\"",
                other
            ))),
        }
    }
}
