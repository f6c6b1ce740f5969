use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use sea_orm::Set;
use serde::Deserialize;

use crate::database::entities::tasks;
use crate::errors::PortalError;
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub task_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub task_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_complete: bool,
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Path(subproject_id): Path<i32>,
) -> Result<Json<Vec<tasks::Model>>, PortalError> {
    state
        .subprojects
        .read_subproject(subproject_id)
        .await
        .ok_or_else(|| PortalError::not_found("subproject", subproject_id))?;

    state.tasks.read_by_subproject(subproject_id).await.map(Json)
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(subproject_id): Path<i32>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<Json<tasks::Model>, PortalError> {
    state
        .subprojects
        .read_subproject(subproject_id)
        .await
        .ok_or_else(|| PortalError::not_found("subproject", subproject_id))?;

    let task = tasks::ActiveModel {
        subproject_id: Set(subproject_id),
        task_name: Set(payload.task_name),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        is_complete: Set(false),
        ..Default::default()
    };

    state.tasks.create_task(task).await.map(Json)
}

pub async fn get_task(
    State(state): State<AppState>,
    Path((subproject_id, task_id)): Path<(i32, i32)>,
) -> Result<Json<tasks::Model>, PortalError> {
    find_in_subproject(&state, subproject_id, task_id)
        .await
        .map(Json)
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((subproject_id, task_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<tasks::Model>, PortalError> {
    let existing = find_in_subproject(&state, subproject_id, task_id).await?;

    let mut task: tasks::ActiveModel = existing.into();
    task.task_name = Set(payload.task_name);
    task.start_date = Set(payload.start_date);
    task.end_date = Set(payload.end_date);
    task.is_complete = Set(payload.is_complete);

    state.tasks.update_task(task).await.map(Json)
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((subproject_id, task_id)): Path<(i32, i32)>,
) -> Result<Json<serde_json::Value>, PortalError> {
    find_in_subproject(&state, subproject_id, task_id).await?;
    state.tasks.delete_task(task_id).await?;
    Ok(Json(serde_json::json!({ "deleted": task_id })))
}

async fn find_in_subproject(
    state: &AppState,
    subproject_id: i32,
    task_id: i32,
) -> Result<tasks::Model, PortalError> {
    state
        .tasks
        .read_task(task_id)
        .await
        .filter(|t| t.subproject_id == subproject_id)
        .ok_or_else(|| PortalError::not_found("task", task_id))
}
