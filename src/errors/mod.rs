//! Error taxonomy for the portal.
//!
//! Reads that match nothing surface as `None` at the service layer and become
//! `NotFound` only when a handler needs a response. Write failures wrap the
//! storage cause in `Operation`. Validation failures carry the offending
//! value and are never silently defaulted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{0}")]
    Validation(String),

    #[error("invalid credentials")]
    Unauthorized,

    #[error("{context}")]
    Operation {
        context: String,
        #[source]
        source: DbErr,
    },
}

impl PortalError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn operation(context: impl Into<String>, source: DbErr) -> Self {
        Self::Operation {
            context: context.into(),
            source,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = match &self {
            PortalError::NotFound { .. } => StatusCode::NOT_FOUND,
            PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::Unauthorized => StatusCode::UNAUTHORIZED,
            PortalError::Operation { context, source } => {
                tracing::error!("{}: {}", context, source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
