//! Item HTTP Handlers
//!
//! - POST   /items      创建商品
//! - GET    /items      商品列表（`?force_error=true` 触发 500）
//! - GET    /items/:id  商品详情
//! - PUT    /items/:id  部分更新商品
//! - DELETE /items/:id  删除商品

use axum::extract::State;
use serde::Deserialize;
use serde_json::Number;
use std::sync::Arc;

use crate::application::{
    CreateItem, DeleteItem, DeletedResponse, GetItem, ListItems, UpdateItem,
};
use crate::domain::Item;
use crate::infrastructure::http::dto::Envelope;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{
    parse_json_body, IdPath, JsonBody, QueryParams, RawBody,
};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 创建商品请求，字段是否存在由应用层校验
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// 更新商品请求，缺省或 null 的字段保持不变
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub price: Option<Number>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<Envelope<Item>, ApiError> {
    let command = CreateItem {
        name: req.name,
        price: req.price,
    };

    let item = state.create_item_handler.handle(command).await?;

    Ok(Envelope::created(item, "Item created successfully"))
}

/// GET /items
///
/// `?force_error=true` 会走故障注入分支，返回 500。
/// 同名参数重复出现时只看第一个值
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Envelope<Vec<Item>>, ApiError> {
    let query = ListItems {
        force_error: params.first("force_error") == Some("true"),
    };

    let items = state.list_items_handler.handle(query).await?;

    Ok(Envelope::ok(items, "Item list retrieved"))
}

/// GET /items/:id
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    IdPath(item_id): IdPath,
) -> Result<Envelope<Item>, ApiError> {
    let item = state.get_item_handler.handle(GetItem { item_id }).await?;

    Ok(Envelope::ok(item, "Item retrieved"))
}

/// PUT /items/:id
///
/// 先确认 id 存在再解析请求体：不存在的 id 一律 404
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    IdPath(item_id): IdPath,
    RawBody(body): RawBody,
) -> Result<Envelope<Item>, ApiError> {
    state.get_item_handler.handle(GetItem { item_id }).await?;
    let req: UpdateItemRequest = parse_json_body(&body)?;

    let command = UpdateItem {
        item_id,
        name: req.name,
        price: req.price,
    };

    let item = state.update_item_handler.handle(command).await?;

    Ok(Envelope::ok(item, "Item updated successfully"))
}

/// DELETE /items/:id
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    IdPath(item_id): IdPath,
) -> Result<Envelope<DeletedResponse>, ApiError> {
    let deleted = state
        .delete_item_handler
        .handle(DeleteItem { item_id })
        .await?;

    Ok(Envelope::ok(deleted, "Item deleted successfully"))
}
