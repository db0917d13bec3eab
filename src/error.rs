use http::StatusCode;
use thiserror::Error;

/// Generic message shown to callers when the search backend misbehaves.
/// The backend's own detail goes to the log, never to the response body.
pub const BACKEND_FAILURE_MESSAGE: &str = "Failed to fetch results from Solr";

#[derive(Error, Debug, Clone)]
pub enum SolrgateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Search backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Search backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SolrgateError>;

impl From<serde_json::Error> for SolrgateError {
    fn from(e: serde_json::Error) -> Self {
        SolrgateError::Json(e.to_string())
    }
}

impl From<url::ParseError> for SolrgateError {
    fn from(e: url::ParseError) -> Self {
        SolrgateError::Config(format!("invalid URL: {}", e))
    }
}

impl SolrgateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SolrgateError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SolrgateError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SolrgateError::Backend { .. } => StatusCode::BAD_GATEWAY,
            SolrgateError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            SolrgateError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SolrgateError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures caused by the search backend rather than the caller.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            SolrgateError::BackendUnavailable(_)
                | SolrgateError::Backend { .. }
                | SolrgateError::MalformedResponse(_)
        )
    }
}

// Axum IntoResponse implementation (feature-gated)
#[cfg(feature = "axum-support")]
use axum::response::{IntoResponse, Json, Response};
#[cfg(feature = "axum-support")]
use serde::Serialize;

#[cfg(feature = "axum-support")]
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub request_id: String,
}

#[cfg(feature = "axum-support")]
impl IntoResponse for SolrgateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_code, message) = match &self {
            SolrgateError::InvalidInput(msg) => ("invalid_input", msg.clone()),
            SolrgateError::BackendUnavailable(_) => {
                ("backend_unavailable", BACKEND_FAILURE_MESSAGE.to_string())
            }
            SolrgateError::Backend { .. } => ("backend_error", BACKEND_FAILURE_MESSAGE.to_string()),
            SolrgateError::MalformedResponse(_) => {
                ("malformed_response", BACKEND_FAILURE_MESSAGE.to_string())
            }
            SolrgateError::Json(msg) => ("json_error", msg.clone()),
            SolrgateError::Config(_) => ("config_error", "Server misconfigured".to_string()),
        };

        let request_id = uuid::Uuid::new_v4().to_string();
        if status.is_server_error() {
            tracing::warn!(
                request_id = %request_id,
                status = status.as_u16(),
                error = %self,
                "request failed"
            );
        }

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
            request_id,
        };
        (status, Json(body)).into_response()
    }
}
