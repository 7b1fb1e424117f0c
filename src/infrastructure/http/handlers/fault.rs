//! Fault & Fallback Handlers
//!
//! - GET /test500      总是返回 500 信封
//! - 未匹配路径        404 信封
//! - 路径存在方法不符  405 信封

use axum::http::{Method, Uri};

use crate::application::ApplicationError;
use crate::infrastructure::http::error::ApiError;

/// GET /test500 - 总是返回注入的故障
pub async fn test_500() -> Result<(), ApiError> {
    Err(ApplicationError::FaultInjected("GET /test500").into())
}

/// 未匹配路径
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}

/// 路径存在但方法不支持
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!(
        "Method {} is not allowed on {}",
        method,
        uri.path()
    ))
}
