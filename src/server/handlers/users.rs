use axum::{
    extract::{Path, State},
    response::Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::database::entities::users;
use crate::errors::PortalError;
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub company_id: i32,
    pub user_name: String,
    pub user_password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub company_id: i32,
    pub user_name: String,
    pub user_password: String,
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<users::Model>>, PortalError> {
    state.users.read_all_users().await.map(Json)
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<users::Model>, PortalError> {
    let user = users::ActiveModel {
        company_id: Set(payload.company_id),
        user_name: Set(payload.user_name),
        user_password: Set(payload.user_password),
        ..Default::default()
    };

    state.users.create_user(user).await.map(Json)
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<users::Model>, PortalError> {
    state
        .users
        .read_user(user_id)
        .await
        .map(Json)
        .ok_or_else(|| PortalError::not_found("user", user_id))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<users::Model>, PortalError> {
    let existing = state
        .users
        .read_user(user_id)
        .await
        .ok_or_else(|| PortalError::not_found("user", user_id))?;

    let mut user: users::ActiveModel = existing.into();
    user.company_id = Set(payload.company_id);
    user.user_name = Set(payload.user_name);
    user.user_password = Set(payload.user_password);

    state.users.update_user(user).await.map(Json)
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<serde_json::Value>, PortalError> {
    state.users.delete_user(user_id).await?;
    Ok(Json(serde_json::json!({ "deleted": user_id })))
}
