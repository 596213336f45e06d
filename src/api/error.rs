use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::DataError;

/// Boundary error for the view handlers. Data-layer failures pass through
/// with their own status mapping; the variants here cover what only the
/// HTTP layer can decide.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Data(#[from] DataError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => {
                let body = Json(json!({
                    "error": "NOT_FOUND",
                    "message": self.to_string(),
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Validation(_) => {
                let body = Json(json!({
                    "error": "INVALID_INPUT",
                    "message": self.to_string(),
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Data(err) => err.into_response(),
        }
    }
}
