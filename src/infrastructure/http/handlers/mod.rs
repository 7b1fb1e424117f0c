//! HTTP Handlers
//!
//! - item:  /items, /items/:id
//! - user:  /users, /users/:id
//! - fault: /test500 与路由兜底

mod fault;
mod item;
mod user;

pub use fault::*;
pub use item::*;
pub use user::*;
