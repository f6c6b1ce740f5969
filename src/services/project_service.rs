use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::database::entities::{projects, projects::Entity as Projects, subprojects};
use crate::errors::PortalError;

/// CRUD plus the cost/staffing roll-ups reported on a project overview.
#[derive(Clone)]
pub struct ProjectService {
    db: DatabaseConnection,
}

impl ProjectService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_project(
        &self,
        project: projects::ActiveModel,
    ) -> Result<projects::Model, PortalError> {
        project
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to create project", e))
    }

    /// A read that matches nothing, including one that fails at the store,
    /// collapses to `None`.
    pub async fn read_project(&self, project_id: i32) -> Option<projects::Model> {
        Projects::find_by_id(project_id)
            .one(&self.db)
            .await
            .ok()
            .flatten()
    }

    pub async fn read_all_projects(&self) -> Result<Vec<projects::Model>, PortalError> {
        Projects::find()
            .order_by_asc(projects::Column::ProjectId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to list projects", e))
    }

    pub async fn update_project(
        &self,
        project: projects::ActiveModel,
    ) -> Result<projects::Model, PortalError> {
        project
            .update(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to update project", e))
    }

    pub async fn delete_project(&self, project_id: i32) -> Result<(), PortalError> {
        let result = Projects::delete_by_id(project_id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to delete project", e))?;

        if result.rows_affected == 0 {
            return Err(PortalError::not_found("project", project_id));
        }
        Ok(())
    }

    /// Headcount still free across the project: for each subproject, the
    /// project's assigned capacity minus what that subproject has claimed.
    pub fn total_available_employees(
        subprojects: &[subprojects::Model],
        project: &projects::Model,
    ) -> i32 {
        subprojects
            .iter()
            .map(|s| project.total_assigned_employees - s.total_assigned_employees)
            .sum()
    }

    pub fn total_actual_cost(subprojects: &[subprojects::Model]) -> f64 {
        subprojects.iter().map(|s| s.total_actual_cost).sum()
    }

    /// Fixed `YYYY-MM-DD` rendering for client-side scripts, independent of
    /// locale.
    pub fn format_for_javascript(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
