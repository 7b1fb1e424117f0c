//! Data Transfer Objects
//!
//! 统一响应信封：所有响应体都是 `{status, data, message}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 业务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub data: Option<T>,
    pub message: String,
}

/// 带 HTTP 状态码的响应信封
///
/// `success` 只与 2xx 搭配，`error` 只与 4xx/5xx 搭配。
#[derive(Debug)]
pub struct Envelope<T: Serialize> {
    http_status: StatusCode,
    body: ApiResponse<T>,
}

impl<T: Serialize> Envelope<T> {
    /// 构造响应信封
    pub fn new(
        status: ResponseStatus,
        http_status: StatusCode,
        data: Option<T>,
        message: impl Into<String>,
    ) -> Self {
        debug_assert_eq!(
            status == ResponseStatus::Success,
            http_status.is_success(),
            "business status must agree with HTTP status {http_status}"
        );
        Self {
            http_status,
            body: ApiResponse {
                status,
                data,
                message: message.into(),
            },
        }
    }

    /// 200 成功响应
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(ResponseStatus::Success, StatusCode::OK, Some(data), message)
    }

    /// 201 创建成功响应
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(
            ResponseStatus::Success,
            StatusCode::CREATED,
            Some(data),
            message,
        )
    }
}

impl Envelope<()> {
    /// 错误响应，data 固定为 null
    pub fn error(http_status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(ResponseStatus::Error, http_status, None, message)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.http_status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_created_envelope() {
        let response = Envelope::created(json!({"id": 1}), "created").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"status": "success", "data": {"id": 1}, "message": "created"})
        );
    }

    #[tokio::test]
    async fn test_error_envelope_has_null_data() {
        let response = Envelope::error(StatusCode::NOT_FOUND, "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"status": "error", "data": null, "message": "missing"})
        );
    }

    #[tokio::test]
    async fn test_ok_envelope_with_list() {
        let response = Envelope::ok(vec![1, 2], "listed").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "success", "data": [1, 2], "message": "listed"})
        );
    }
}
