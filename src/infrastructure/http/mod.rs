//! HTTP Layer - RESTful API
//!
//! 统一信封、请求日志、响应头注入、panic 兜底

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::{ApiResponse, Envelope, ResponseStatus};
pub use error::ApiError;
pub use routes::create_routes;
pub use server::{create_app, with_middleware, HttpServer, ServerConfig};
pub use state::AppState;
