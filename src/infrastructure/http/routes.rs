//! HTTP Routes
//!
//! API Endpoints:
//! - /items          POST    创建商品
//! - /items          GET     商品列表（`?force_error=true` 触发 500）
//! - /items/:id      GET     商品详情
//! - /items/:id      PUT     部分更新商品
//! - /items/:id      DELETE  删除商品
//! - /users          POST    创建用户
//! - /users          GET     用户列表
//! - /users/:id      GET     用户详情
//! - /users/:id      PUT     部分更新用户
//! - /users/:id      DELETE  删除用户
//! - /test500        GET     总是返回 500

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(item_routes())
        .merge(user_routes())
        .route(
            "/test500",
            get(handlers::test_500).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
}

/// Item 路由
fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/items",
            post(handlers::create_item)
                .get(handlers::list_items)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/items/:id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item)
                .fallback(handlers::method_not_allowed),
        )
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            post(handlers::create_user)
                .get(handlers::list_users)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user)
                .fallback(handlers::method_not_allowed),
        )
}
