//! In-Memory Item Repository Implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{ItemRepositoryPort, RepositoryError};
use crate::domain::{EntityId, Item, ItemPatch, NewItem};

use super::InMemoryTable;

/// 内存商品仓储，进程退出即丢失
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: InMemoryTable<Item>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: InMemoryTable::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItemRepository {
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError> {
        self.items.insert_with(|id| Item::from_new(id, item))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Item>, RepositoryError> {
        Ok(self.items.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.items.all())
    }

    async fn update(
        &self,
        id: EntityId,
        patch: ItemPatch,
    ) -> Result<Option<Item>, RepositoryError> {
        Ok(self.items.modify(id, |item| item.apply(patch)))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        Ok(self.items.remove(id).is_some())
    }
}
