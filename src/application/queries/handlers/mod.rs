//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod item_handlers;
mod user_handlers;

pub use item_handlers::*;
pub use user_handlers::*;
