//! Domain Layer - 领域层
//!
//! 两个互相独立的实体：
//! - Item: 商品（name, price）
//! - User: 用户（username, email）

mod errors;
mod item;
mod user;

pub use errors::DomainError;
pub use item::{Item, ItemPatch, NewItem};
pub use user::{NewUser, User, UserPatch};

/// 存储分配的实体 id，从 1 开始单调递增
pub type EntityId = u64;
