//! Item Queries

use crate::domain::EntityId;

/// 获取商品详情查询
#[derive(Debug, Clone)]
pub struct GetItem {
    pub item_id: EntityId,
}

/// 列出所有商品查询
#[derive(Debug, Clone, Default)]
pub struct ListItems {
    /// 为 true 时不读取存储，直接返回注入的故障
    pub force_error: bool,
}
