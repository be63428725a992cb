//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::PipelineError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
///
/// Messages are surfaced verbatim to the caller; decode failures include the
/// raw model output for diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Store failure: {0}")]
    Store(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Generation(_) => (StatusCode::BAD_GATEWAY, "GENERATION_FAILED"),
            ApiError::Decode(_) => (StatusCode::BAD_GATEWAY, "DECODE_FAILED"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_FAILED"),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Validation(msg) => ApiError::BadRequest(msg),
            PipelineError::Generation(e) => ApiError::Generation(e.to_string()),
            PipelineError::Decode { .. } => ApiError::Decode(err.to_string()),
            PipelineError::Store(e) => ApiError::Store(e.to_string()),
        }
    }
}

impl From<crate::db::DatabaseError> for ApiError {
    fn from(err: crate::db::DatabaseError) -> Self {
        ApiError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    use crate::llm::GenerationError;

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("Missing 'dialog' parameter".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Missing 'dialog' parameter"));
    }

    #[tokio::test]
    async fn generation_failure_returns_502() {
        let response = ApiError::Generation("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "GENERATION_FAILED");
    }

    #[tokio::test]
    async fn decode_failure_surfaces_raw_model_output() {
        let pipeline_err = PipelineError::Decode {
            reason: "expected value".into(),
            raw: "not json".into(),
        };
        let response = ApiError::from(pipeline_err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "DECODE_FAILED");
        assert!(json["error"]["message"].as_str().unwrap().contains("not json"));
    }

    #[tokio::test]
    async fn store_failure_returns_500() {
        let response = ApiError::Store("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err: ApiError = PipelineError::Validation("empty prompt".into()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn generation_maps_to_generation() {
        let err: ApiError =
            PipelineError::Generation(GenerationError::EmptyCompletion).into();
        assert!(matches!(err, ApiError::Generation(_)));
    }
}
