use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the data access layer. "Zero rows" is never an
/// error; readers return an empty table instead.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),
    #[error("Write failed: {0}")]
    WriteFailed(#[source] sqlx::Error),
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
    )
}

impl DataError {
    pub fn on_read(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            DataError::ConnectionFailed(err)
        } else {
            DataError::QueryFailed(err)
        }
    }

    pub fn on_write(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            DataError::ConnectionFailed(err)
        } else {
            DataError::WriteFailed(err)
        }
    }
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self {
            DataError::ConnectionFailed(_) => (StatusCode::SERVICE_UNAVAILABLE, "CONNECTION_FAILED"),
            DataError::QueryFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "QUERY_FAILED"),
            DataError::WriteFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "WRITE_FAILED"),
        };

        tracing::error!("{}", self);

        let body = Json(json!({
            "error": error_code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
