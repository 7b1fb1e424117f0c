//! Memory Layer - In-Memory State Management
//!
//! 实现商品与用户仓储，所有数据只在进程生命周期内有效

mod item_repository;
mod table;
mod user_repository;

pub use item_repository::InMemoryItemRepository;
pub use table::InMemoryTable;
pub use user_repository::InMemoryUserRepository;
