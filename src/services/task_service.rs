use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::database::entities::{tasks, tasks::Entity as Tasks};
use crate::errors::PortalError;

#[derive(Clone)]
pub struct TaskService {
    db: DatabaseConnection,
}

impl TaskService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_task(&self, task: tasks::ActiveModel) -> Result<tasks::Model, PortalError> {
        task.insert(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to create task", e))
    }

    pub async fn read_task(&self, task_id: i32) -> Option<tasks::Model> {
        Tasks::find_by_id(task_id).one(&self.db).await.ok().flatten()
    }

    pub async fn read_by_subproject(
        &self,
        subproject_id: i32,
    ) -> Result<Vec<tasks::Model>, PortalError> {
        Tasks::find()
            .filter(tasks::Column::SubprojectId.eq(subproject_id))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to list tasks", e))
    }

    pub async fn update_task(&self, task: tasks::ActiveModel) -> Result<tasks::Model, PortalError> {
        task.update(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to update task", e))
    }

    pub async fn delete_task(&self, task_id: i32) -> Result<(), PortalError> {
        let result = Tasks::delete_by_id(task_id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to delete task", e))?;

        if result.rows_affected == 0 {
            return Err(PortalError::not_found("task", task_id));
        }
        Ok(())
    }
}
