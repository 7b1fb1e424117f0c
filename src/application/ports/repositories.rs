//! Repository Ports - 出站端口
//!
//! 定义实体存储的抽象接口
//! 具体实现在 infrastructure 层（进程内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{EntityId, Item, ItemPatch, NewItem, NewUser, User, UserPatch};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// id 计数器已到上限，无法再分配新 id
    #[error("Id space exhausted after id={last_id}")]
    IdSpaceExhausted { last_id: EntityId },
}

// ============================================================================
// Item Repository
// ============================================================================

/// Item Repository Port
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// 分配下一个 id 并保存商品
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Item>, RepositoryError>;

    /// 获取所有商品（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;

    /// 部分更新，id 不存在时返回 `None`
    async fn update(
        &self,
        id: EntityId,
        patch: ItemPatch,
    ) -> Result<Option<Item>, RepositoryError>;

    /// 删除商品，返回是否存在
    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;
}

// ============================================================================
// User Repository
// ============================================================================

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    async fn update(
        &self,
        id: EntityId,
        patch: UserPatch,
    ) -> Result<Option<User>, RepositoryError>;

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;
}
