//! Domain Errors

use thiserror::Error;

/// 实体校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必填字段缺失或为空
    #[error("{fields} are required")]
    MissingFields { fields: &'static str },
}
