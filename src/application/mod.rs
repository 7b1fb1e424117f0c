//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 存储端口定义（ItemRepository、UserRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Item commands
    CreateItem,
    DeleteItem,
    UpdateItem,
    // User commands
    CreateUser,
    DeleteUser,
    UpdateUser,
    // Handlers
    handlers::{
        CreateItemHandler, CreateUserHandler, DeleteItemHandler, DeleteUserHandler,
        DeletedResponse, UpdateItemHandler, UpdateUserHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{ItemRepositoryPort, RepositoryError, UserRepositoryPort};

pub use queries::{
    // Item queries
    GetItem,
    ListItems,
    // User queries
    GetUser,
    ListUsers,
    // Handlers
    handlers::{GetItemHandler, GetUserHandler, ListItemsHandler, ListUsersHandler},
};
