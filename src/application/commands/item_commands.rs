//! Item Commands

use serde_json::Number;

use crate::domain::EntityId;

/// 创建商品命令（字段尚未校验）
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// 更新商品命令，`None` 字段保持不变
#[derive(Debug, Clone)]
pub struct UpdateItem {
    pub item_id: EntityId,
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// 删除商品命令
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub item_id: EntityId,
}
