//! Application State
//!
//! 持有两个仓储以及所有 Command/Query Handlers，进程启动时构造一次

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateItemHandler, CreateUserHandler, DeleteItemHandler, DeleteUserHandler,
    UpdateItemHandler, UpdateUserHandler,
    // Query handlers
    GetItemHandler, GetUserHandler, ListItemsHandler, ListUsersHandler,
    // Ports
    ItemRepositoryPort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub item_repo: Arc<dyn ItemRepositoryPort>,
    pub user_repo: Arc<dyn UserRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_item_handler: CreateItemHandler,
    pub update_item_handler: UpdateItemHandler,
    pub delete_item_handler: DeleteItemHandler,
    pub create_user_handler: CreateUserHandler,
    pub update_user_handler: UpdateUserHandler,
    pub delete_user_handler: DeleteUserHandler,

    // ========== Query Handlers ==========
    pub get_item_handler: GetItemHandler,
    pub list_items_handler: ListItemsHandler,
    pub get_user_handler: GetUserHandler,
    pub list_users_handler: ListUsersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        item_repo: Arc<dyn ItemRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
    ) -> Self {
        Self {
            // Ports
            item_repo: item_repo.clone(),
            user_repo: user_repo.clone(),

            // Command handlers
            create_item_handler: CreateItemHandler::new(item_repo.clone()),
            update_item_handler: UpdateItemHandler::new(item_repo.clone()),
            delete_item_handler: DeleteItemHandler::new(item_repo.clone()),
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            update_user_handler: UpdateUserHandler::new(user_repo.clone()),
            delete_user_handler: DeleteUserHandler::new(user_repo.clone()),

            // Query handlers
            get_item_handler: GetItemHandler::new(item_repo.clone()),
            list_items_handler: ListItemsHandler::new(item_repo),
            get_user_handler: GetUserHandler::new(user_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo),
        }
    }
}
