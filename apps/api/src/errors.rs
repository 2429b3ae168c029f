use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::stylist::validation::Field;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Submission blocked by field validation; carries the visible messages.
    #[error("Form is invalid")]
    InvalidForm(BTreeMap<Field, String>),

    /// The recommendation call failed; carries the banner message.
    #[error("Recommendation error: {0}")]
    Recommendation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "code": "VALIDATION_ERROR", "message": msg } }),
            ),
            AppError::InvalidForm(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Please fix the highlighted fields.",
                        "fields": fields
                    }
                }),
            ),
            AppError::Recommendation(msg) => {
                tracing::error!("Recommendation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": { "code": "RECOMMENDATION_ERROR", "message": msg } }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
