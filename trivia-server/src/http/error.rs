//! API error types with IntoResponse
//!
//! Every failure reaches the client as
//! `{success: false, error: <code>, message: <text>}` with the matching
//! status. Causes are logged, never returned.

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed input or a failed read (400)
    BadRequest,

    /// Queried resource or collection is empty (404)
    NotFound,

    /// Known path, wrong verb (405)
    MethodNotAllowed,

    /// Failed write or unusable write input (422)
    Unprocessable,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable => "unprocessable entity",
        }
    }

    /// Map a failure on a read path to 400, logging the cause.
    pub fn read_failed<E: Display>(err: E) -> Self {
        tracing::error!(error = %err, "read failed");
        Self::BadRequest
    }

    /// Map a failure on a write path to 422, logging the cause.
    pub fn write_failed<E: Display>(err: E) -> Self {
        tracing::error!(error = %err, "write failed");
        Self::Unprocessable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status != StatusCode::NOT_FOUND {
            tracing::warn!(status = status.as_u16(), "request failed");
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message()
        });

        (status, Json(body)).into_response()
    }
}

/// Router fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known paths hit with an unsupported verb
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let (status, body) = envelope(ApiError::BadRequest).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": 400, "message": "bad request"})
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = envelope(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "resource not found");
        assert_eq!(body["error"], 404);
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let (status, body) = envelope(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "method not allowed");
    }

    #[tokio::test]
    async fn unprocessable_is_422() {
        let (status, body) = envelope(ApiError::Unprocessable).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "unprocessable entity");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn store_failures_map_by_path() {
        assert_eq!(ApiError::read_failed("boom"), ApiError::BadRequest);
        assert_eq!(ApiError::write_failed("boom"), ApiError::Unprocessable);
    }
}
