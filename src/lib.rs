//! Crudkit - 统一响应信封的 CRUD 演示服务
//!
//! 分层结构:
//!
//! 领域层 (domain/):
//! - Item / User 实体及其部分更新规则
//!
//! 应用层 (application/):
//! - Ports: ItemRepository, UserRepository
//! - Commands: 创建、更新、删除
//! - Queries: 详情、列表（含故障注入）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 路由、统一信封、中间件、panic 兜底
//! - Memory: 进程内仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
