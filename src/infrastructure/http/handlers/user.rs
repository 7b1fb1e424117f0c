//! User HTTP Handlers
//!
//! - POST   /users      创建用户
//! - GET    /users      用户列表
//! - GET    /users/:id  用户详情
//! - PUT    /users/:id  部分更新用户
//! - DELETE /users/:id  删除用户

use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    CreateUser, DeleteUser, DeletedResponse, GetUser, ListUsers, UpdateUser,
};
use crate::domain::User;
use crate::infrastructure::http::dto::Envelope;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{parse_json_body, IdPath, JsonBody, RawBody};
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Envelope<User>, ApiError> {
    let command = CreateUser {
        username: req.username,
        email: req.email,
    };

    let user = state.create_user_handler.handle(command).await?;

    Ok(Envelope::created(user, "User created successfully"))
}

/// GET /users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Vec<User>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    Ok(Envelope::ok(users, "User list retrieved"))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    IdPath(user_id): IdPath,
) -> Result<Envelope<User>, ApiError> {
    let user = state.get_user_handler.handle(GetUser { user_id }).await?;

    Ok(Envelope::ok(user, "User retrieved"))
}

/// PUT /users/:id
///
/// 与商品相同：先查 id，再解析请求体
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    IdPath(user_id): IdPath,
    RawBody(body): RawBody,
) -> Result<Envelope<User>, ApiError> {
    state.get_user_handler.handle(GetUser { user_id }).await?;
    let req: UpdateUserRequest = parse_json_body(&body)?;

    let command = UpdateUser {
        user_id,
        username: req.username,
        email: req.email,
    };

    let user = state.update_user_handler.handle(command).await?;

    Ok(Envelope::ok(user, "User updated successfully"))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    IdPath(user_id): IdPath,
) -> Result<Envelope<DeletedResponse>, ApiError> {
    let deleted = state
        .delete_user_handler
        .handle(DeleteUser { user_id })
        .await?;

    Ok(Envelope::ok(deleted, "User deleted successfully"))
}
