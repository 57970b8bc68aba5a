//! API error types with `{ "error": "..." }` JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core_state::CoreError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database not configured")]
    NotConfigured,
    /// `message` goes to the client; `detail` only to the log.
    #[error("{message}: {detail}")]
    Internal { message: &'static str, detail: String },
}

impl ApiError {
    pub fn internal(message: &'static str, detail: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            message,
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::NotConfigured => {
                tracing::error!("Request rejected: database not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database not configured".to_string(),
                )
            }
            ApiError::Internal { message, detail } => {
                tracing::error!(detail = %detail, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotConfigured => ApiError::NotConfigured,
            CoreError::Database(e) => ApiError::internal("Database unavailable", e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_400_with_message() {
        let response = ApiError::BadRequest("Advocate ID is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Advocate ID is required");
    }

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("Advocate not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn not_configured_returns_500() {
        let response = ApiError::NotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Database not configured");
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let response =
            ApiError::internal("Failed to fetch advocates", "no such table: advocates")
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to fetch advocates");
    }

    #[tokio::test]
    async fn core_not_configured_maps_to_not_configured() {
        let api_err: ApiError = CoreError::NotConfigured.into();
        assert!(matches!(api_err, ApiError::NotConfigured));
    }
}
