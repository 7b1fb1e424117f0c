//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod item_handlers;
mod user_handlers;

pub use item_handlers::*;
pub use user_handlers::*;

use serde::Serialize;

use crate::domain::EntityId;

/// 删除成功后的返回数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedResponse {
    pub deleted_id: EntityId,
}
