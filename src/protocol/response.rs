//! Response bodies

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::LibrisError;
use crate::record::Book;

/// Plain confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Confirmation message together with the affected book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub message: String,
    pub book: Book,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl LibrisError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LibrisError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            LibrisError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            LibrisError::KeyMismatch { .. } => StatusCode::BAD_REQUEST,
            LibrisError::NotFound(_) => StatusCode::NOT_FOUND,
            LibrisError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LibrisError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<&LibrisError> for ErrorResponse {
    fn from(err: &LibrisError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for LibrisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
