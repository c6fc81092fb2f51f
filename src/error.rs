// src/error.rs

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::simulators::SimulationError;

/// Errors that reach an HTTP client as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself is unusable (400).
    #[error("{0}")]
    InvalidInput(String),
    /// Something broke while building an otherwise valid response (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::InvalidInput(msg) => Self::InvalidInput(msg),
        }
    }
}

impl From<time::error::Format> for ApiError {
    fn from(err: time::error::Format) -> Self {
        Self::Internal(format!("date formatting failed: {err}"))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
