//! Error-to-response mapping for the HTTP API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message describing the failure.
    pub detail: String,
}

/// Error type returned by HTTP handlers.
///
/// Carries the status code and the client-facing message; the
/// [`IntoResponse`] impl renders both as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// 404 with the fixed body clients expect for a missing issue.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: "Issue not found".to_string(),
        }
    }
}

impl From<dowel::error::Error> for ApiError {
    fn from(err: dowel::error::Error) -> Self {
        match err {
            dowel::error::Error::IssueNotFound(_) => Self::not_found(),
            dowel::error::Error::Validation(detail) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
