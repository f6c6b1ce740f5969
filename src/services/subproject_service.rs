use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::database::entities::{subprojects, subprojects::Entity as Subprojects};
use crate::errors::PortalError;

#[derive(Clone)]
pub struct SubprojectService {
    db: DatabaseConnection,
}

impl SubprojectService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_subproject(
        &self,
        subproject: subprojects::ActiveModel,
    ) -> Result<subprojects::Model, PortalError> {
        subproject
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to create subproject", e))
    }

    pub async fn read_subproject(&self, subproject_id: i32) -> Option<subprojects::Model> {
        Subprojects::find_by_id(subproject_id)
            .one(&self.db)
            .await
            .ok()
            .flatten()
    }

    pub async fn read_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<subprojects::Model>, PortalError> {
        Subprojects::find()
            .filter(subprojects::Column::ProjectId.eq(project_id))
            .order_by_asc(subprojects::Column::SubprojectId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to list subprojects", e))
    }

    pub async fn update_subproject(
        &self,
        subproject: subprojects::ActiveModel,
    ) -> Result<subprojects::Model, PortalError> {
        subproject
            .update(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to update subproject", e))
    }

    pub async fn delete_subproject(&self, subproject_id: i32) -> Result<(), PortalError> {
        let result = Subprojects::delete_by_id(subproject_id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to delete subproject", e))?;

        if result.rows_affected == 0 {
            return Err(PortalError::not_found("subproject", subproject_id));
        }
        Ok(())
    }
}
