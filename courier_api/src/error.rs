use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_optimizer::{error::OptimizeError, json::types::JsonErrorResponse};
use tokio::task::JoinError;
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
}

impl From<OptimizeError> for ApiError {
    fn from(error: OptimizeError) -> Self {
        if error.is_caller_error() {
            ApiError::BadRequest(error.to_string())
        } else {
            ApiError::InternalServerError(error.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(error: JoinError) -> Self {
        ApiError::InternalServerError(format!("optimization task failed: {error}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(message) => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::BadRequest(message) => {
                warn!(%message, "request rejected");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(JsonErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use courier_optimizer::solver::tour::InvalidSequenceError;
    use serde_json::{Value, json};

    use super::*;

    async fn into_parts(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_sequence_is_internal_error() {
        let error = ApiError::from(OptimizeError::InvalidSequence(
            InvalidSequenceError::WrongLength {
                expected: 4,
                actual: 3,
            },
        ));
        assert!(matches!(error, ApiError::InternalServerError(_)));

        let (status, body) = into_parts(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("expected 4 stops"));
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let error = ApiError::from(OptimizeError::validation("coolingRate must be within (0, 1)"));

        let (status, body) = into_parts(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("coolingRate must be within (0, 1)"));
    }
}
