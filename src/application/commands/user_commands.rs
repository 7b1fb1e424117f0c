//! User Commands

use crate::domain::EntityId;

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// 更新用户命令
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: EntityId,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: EntityId,
}
