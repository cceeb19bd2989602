//! Request-scoped error type and its axum response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// One variant per branch of the response contract. The payload shape varies
/// with the variant: malformed ids answer with a bare JSON string, read
/// failures and misses with `{"message": ...}`, everything else with
/// `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path id is not a well-formed ObjectId; rejected before any store call.
    #[error("{0}")]
    MalformedId(&'static str),
    /// Body failed the required-field or email-format check.
    #[error("{0}")]
    Validation(&'static str),
    /// A read against the store failed; the driver error is passed through.
    #[error("{0}")]
    Query(anyhow::Error),
    /// No contact matches the requested id.
    #[error("Contact not found.")]
    NotFound,
    /// Replace modified nothing: unknown id or an identical replacement,
    /// indistinguishable here.
    #[error("Contact not found or no changes made.")]
    NothingUpdated,
    /// Delete removed nothing.
    #[error("Contact not found.")]
    NothingDeleted,
    /// A write against the store failed.
    #[error("{0}")]
    Write(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            ApiError::MalformedId(_) => (StatusCode::BAD_REQUEST, json!(message)),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            ApiError::Query(_) => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            ApiError::NotFound => (StatusCode::NOT_FOUND, json!({ "message": message })),
            ApiError::NothingUpdated | ApiError::NothingDeleted => {
                (StatusCode::NOT_FOUND, json!({ "error": message }))
            }
            ApiError::Write(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
