use axum::{extract::State, response::Json};
use serde::Deserialize;

use crate::database::entities::users;
use crate::errors::PortalError;
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A failed lookup and a wrong password are deliberately the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<users::Model>, PortalError> {
    state
        .users
        .authenticate(&payload.username, &payload.password)
        .await
        .map(Json)
        .ok_or(PortalError::Unauthorized)
}
