use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use sea_orm::Set;
use serde::Deserialize;

use crate::database::entities::subprojects::{self, Priority};
use crate::errors::PortalError;
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct CreateSubprojectRequest {
    pub subproject_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_estimated_cost: f64,
    pub total_actual_cost: f64,
    pub total_assigned_employees: i32,
    pub subproject_description: Option<String>,
    pub hours_allocated: i32,
    pub priority: String,
    #[serde(default)]
    pub total_actual_hours: i32,
}

#[derive(Deserialize)]
pub struct UpdateSubprojectRequest {
    pub subproject_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_estimated_cost: f64,
    pub total_actual_cost: f64,
    pub total_assigned_employees: i32,
    pub is_complete: bool,
    pub subproject_description: Option<String>,
    pub hours_allocated: i32,
    pub priority: String,
    pub total_actual_hours: i32,
}

pub async fn list_subprojects(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<Json<Vec<subprojects::Model>>, PortalError> {
    // Verify project exists
    state
        .projects
        .read_project(project_id)
        .await
        .ok_or_else(|| PortalError::not_found("project", project_id))?;

    state.subprojects.read_by_project(project_id).await.map(Json)
}

pub async fn create_subproject(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Json(payload): Json<CreateSubprojectRequest>,
) -> Result<Json<subprojects::Model>, PortalError> {
    state
        .projects
        .read_project(project_id)
        .await
        .ok_or_else(|| PortalError::not_found("project", project_id))?;

    // An unknown priority string must fail loudly, never default
    let priority: Priority = payload.priority.parse()?;

    let subproject = subprojects::ActiveModel {
        project_id: Set(project_id),
        subproject_name: Set(payload.subproject_name),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        total_estimated_cost: Set(payload.total_estimated_cost),
        total_actual_cost: Set(payload.total_actual_cost),
        total_assigned_employees: Set(payload.total_assigned_employees),
        is_complete: Set(false),
        subproject_description: Set(payload.subproject_description),
        hours_allocated: Set(payload.hours_allocated),
        priority: Set(priority.to_string()),
        total_actual_hours: Set(payload.total_actual_hours),
        ..Default::default()
    };

    state.subprojects.create_subproject(subproject).await.map(Json)
}

pub async fn get_subproject(
    State(state): State<AppState>,
    Path((project_id, subproject_id)): Path<(i32, i32)>,
) -> Result<Json<subprojects::Model>, PortalError> {
    find_in_project(&state, project_id, subproject_id)
        .await
        .map(Json)
}

pub async fn update_subproject(
    State(state): State<AppState>,
    Path((project_id, subproject_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateSubprojectRequest>,
) -> Result<Json<subprojects::Model>, PortalError> {
    let existing = find_in_project(&state, project_id, subproject_id).await?;

    let priority: Priority = payload.priority.parse()?;

    let mut subproject: subprojects::ActiveModel = existing.into();
    subproject.subproject_name = Set(payload.subproject_name);
    subproject.start_date = Set(payload.start_date);
    subproject.end_date = Set(payload.end_date);
    subproject.total_estimated_cost = Set(payload.total_estimated_cost);
    subproject.total_actual_cost = Set(payload.total_actual_cost);
    subproject.total_assigned_employees = Set(payload.total_assigned_employees);
    subproject.is_complete = Set(payload.is_complete);
    subproject.subproject_description = Set(payload.subproject_description);
    subproject.hours_allocated = Set(payload.hours_allocated);
    subproject.priority = Set(priority.to_string());
    subproject.total_actual_hours = Set(payload.total_actual_hours);

    state.subprojects.update_subproject(subproject).await.map(Json)
}

pub async fn delete_subproject(
    State(state): State<AppState>,
    Path((project_id, subproject_id)): Path<(i32, i32)>,
) -> Result<Json<serde_json::Value>, PortalError> {
    find_in_project(&state, project_id, subproject_id).await?;
    state.subprojects.delete_subproject(subproject_id).await?;
    Ok(Json(serde_json::json!({ "deleted": subproject_id })))
}

/// A subproject reached through the wrong project is a 404, not a leak.
async fn find_in_project(
    state: &AppState,
    project_id: i32,
    subproject_id: i32,
) -> Result<subprojects::Model, PortalError> {
    state
        .subprojects
        .read_subproject(subproject_id)
        .await
        .filter(|s| s.project_id == project_id)
        .ok_or_else(|| PortalError::not_found("subproject", subproject_id))
}
