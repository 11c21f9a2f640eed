use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::services::cache_gateway::GatewayError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            AppError::Gateway(GatewayError::OriginRejected { status, .. }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to fetch from backend".to_string(),
            ),
            AppError::Gateway(
                e @ (GatewayError::OriginUnavailable(_) | GatewayError::OriginMalformed(_)),
            ) => (StatusCode::BAD_GATEWAY, e.user_message()),
            AppError::Gateway(e @ GatewayError::CacheCorrupt { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
