//! Application error type mapping to HTTP status codes.
//!
//! Every error body is `{"error": "<message>"}`. Caller mistakes are 400;
//! anything else is 500 carrying the raw description.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use greenpay_types::error::{ChatError, SubmissionError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat-related errors.
    Chat(ChatError),
    /// Contact form and newsletter errors.
    Submission(SubmissionError),
    /// Generic internal error.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<SubmissionError> for AppError {
    fn from(e: SubmissionError) -> Self {
        AppError::Submission(e)
    }
}

/// Unreadable bodies (bad JSON, wrong types, missing content type) are not
/// validation failures; they surface as internal errors.
impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Internal(e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Chat(ChatError::EmptyMessage) => (StatusCode::BAD_REQUEST, self.to_message()),
            AppError::Submission(e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, self.to_message())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_message()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        } else {
            tracing::debug!(error = %message, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl AppError {
    fn to_message(&self) -> String {
        match self {
            AppError::Chat(e) => e.to_string(),
            AppError::Submission(e) => e.to_string(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}
