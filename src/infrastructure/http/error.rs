//! HTTP Error Handling
//!
//! 所有错误都转换为 `status = "error"` 的统一信封

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::Envelope;
use crate::application::ApplicationError;

/// 500 响应的固定提示，内部细节只写日志
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed(String),
    /// 携带的字符串只用于日志
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                msg
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(error = %msg, "Method not allowed");
                msg
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        Envelope::error(status, message).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(_) | ApplicationError::FaultInjected(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RepositoryError;

    #[test]
    fn test_application_error_mapping() {
        let err: ApiError = ApplicationError::not_found("Item", 3).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Item with id=3 not found"));

        let err: ApiError = ApplicationError::validation("name and price are required").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: ApiError = ApplicationError::FaultInjected("test").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let exhausted = RepositoryError::IdSpaceExhausted { last_id: 9 };
        let err: ApiError = ApplicationError::from(exhausted).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::Internal("db exploded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert!(body["data"].is_null());
    }
}
