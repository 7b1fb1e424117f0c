//! HTTP Middleware
//!
//! - 请求日志（处理前）
//! - 后端标识响应头（处理后）
//! - HTTP 状态码错误日志
//! - panic 兜底，转换为 500 信封

use std::any::Any;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Local;

use super::error::ApiError;

/// 后端标识响应头
pub const BACKEND_HEADER_NAME: &str = "x-backend-framework";
pub const BACKEND_HEADER_VALUE: &str = "Axum";

/// 请求日志中间件
///
/// 记录时间、方法和路径，不修改请求，也不会中断分发
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    tracing::info!(
        at = %now,
        method = %request.method(),
        path = %request.uri().path(),
        "Incoming request"
    );

    next.run(request).await
}

/// 响应头注入中间件
///
/// 对所有响应（包括 4xx/5xx）设置 `X-Backend-Framework`，不改动状态码和响应体
pub async fn backend_header_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        HeaderName::from_static(BACKEND_HEADER_NAME),
        HeaderValue::from_static(BACKEND_HEADER_VALUE),
    );
    response
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// `CatchPanicLayer` 的 panic 处理函数
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
