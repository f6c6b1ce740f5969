use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::database::entities::{projects, subprojects};
use crate::errors::PortalError;
use crate::server::app::AppState;
use crate::services::ProjectService;

#[derive(Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_estimated_cost: f64,
    pub total_assigned_employees: i32,
    pub project_description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_estimated_cost: f64,
    pub total_assigned_employees: i32,
    pub is_complete: bool,
    pub project_description: Option<String>,
}

/// Pre-populated creation form state: the company comes from the acting
/// user and a new project always starts incomplete.
#[derive(Serialize)]
pub struct ProjectDraft {
    pub company_id: i32,
    pub is_complete: bool,
}

#[derive(Serialize)]
pub struct SubprojectOverview {
    #[serde(flatten)]
    pub subproject: subprojects::Model,
    pub progress_percentage: f64,
}

#[derive(Serialize)]
pub struct ProjectOverview {
    pub project: projects::Model,
    pub start_date_display: String,
    pub end_date_display: String,
    pub total_actual_cost: f64,
    pub total_available_employees: i32,
    pub subprojects: Vec<SubprojectOverview>,
}

pub async fn new_project_draft(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<ProjectDraft>, PortalError> {
    let user = state
        .users
        .read_user(user_id)
        .await
        .ok_or_else(|| PortalError::not_found("user", user_id))?;

    Ok(Json(ProjectDraft {
        company_id: user.company_id,
        is_complete: false,
    }))
}

pub async fn create_project(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<Json<projects::Model>, PortalError> {
    let user = state
        .users
        .read_user(user_id)
        .await
        .ok_or_else(|| PortalError::not_found("user", user_id))?;

    let project = projects::ActiveModel {
        company_id: Set(user.company_id),
        project_name: Set(payload.project_name),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        total_estimated_cost: Set(payload.total_estimated_cost),
        total_assigned_employees: Set(payload.total_assigned_employees),
        is_complete: Set(false),
        project_description: Set(payload.project_description),
        ..Default::default()
    };

    state.projects.create_project(project).await.map(Json)
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<projects::Model>>, PortalError> {
    state.projects.read_all_projects().await.map(Json)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<Json<projects::Model>, PortalError> {
    state
        .projects
        .read_project(project_id)
        .await
        .map(Json)
        .ok_or_else(|| PortalError::not_found("project", project_id))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<projects::Model>, PortalError> {
    let existing = state
        .projects
        .read_project(project_id)
        .await
        .ok_or_else(|| PortalError::not_found("project", project_id))?;

    let mut project: projects::ActiveModel = existing.into();
    project.project_name = Set(payload.project_name);
    project.start_date = Set(payload.start_date);
    project.end_date = Set(payload.end_date);
    project.total_estimated_cost = Set(payload.total_estimated_cost);
    project.total_assigned_employees = Set(payload.total_assigned_employees);
    project.is_complete = Set(payload.is_complete);
    project.project_description = Set(payload.project_description);

    state.projects.update_project(project).await.map(Json)
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<Json<serde_json::Value>, PortalError> {
    state.projects.delete_project(project_id).await?;
    Ok(Json(serde_json::json!({ "deleted": project_id })))
}

pub async fn project_overview(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<Json<ProjectOverview>, PortalError> {
    let project = state
        .projects
        .read_project(project_id)
        .await
        .ok_or_else(|| PortalError::not_found("project", project_id))?;

    let subprojects = state.subprojects.read_by_project(project_id).await?;

    let total_actual_cost = ProjectService::total_actual_cost(&subprojects);
    let total_available_employees =
        ProjectService::total_available_employees(&subprojects, &project);
    let start_date_display = ProjectService::format_for_javascript(project.start_date);
    let end_date_display = ProjectService::format_for_javascript(project.end_date);

    let subprojects = subprojects
        .into_iter()
        .map(|subproject| SubprojectOverview {
            progress_percentage: subproject.progress_percentage(),
            subproject,
        })
        .collect();

    Ok(Json(ProjectOverview {
        project,
        start_date_display,
        end_date_display,
        total_actual_cost,
        total_available_employees,
        subprojects,
    }))
}
