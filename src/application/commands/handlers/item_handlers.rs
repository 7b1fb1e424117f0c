//! Item Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateItem, DeleteItem, UpdateItem};
use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::domain::{Item, ItemPatch, NewItem};

use super::DeletedResponse;

// ============================================================================
// CreateItem
// ============================================================================

/// CreateItem Handler
pub struct CreateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl CreateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    /// 校验失败时不分配 id，存储保持不变
    pub async fn handle(&self, command: CreateItem) -> Result<Item, ApplicationError> {
        let new_item = NewItem::new(command.name, command.price)?;
        let name = new_item.name().to_string();

        let item = self.item_repo.insert(new_item).await?;

        tracing::info!(item_id = item.id, name = %name, "Item created");

        Ok(item)
    }
}

// ============================================================================
// UpdateItem
// ============================================================================

/// UpdateItem Handler
pub struct UpdateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl UpdateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: UpdateItem) -> Result<Item, ApplicationError> {
        let item_id = command.item_id;
        let patch = ItemPatch {
            name: command.name,
            price: command.price,
        };

        let item = self
            .item_repo
            .update(item_id, patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Item", item_id))?;

        tracing::info!(item_id = item_id, "Item updated");

        Ok(item)
    }
}

// ============================================================================
// DeleteItem
// ============================================================================

/// DeleteItem Handler
pub struct DeleteItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl DeleteItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: DeleteItem) -> Result<DeletedResponse, ApplicationError> {
        let item_id = command.item_id;

        if !self.item_repo.delete(item_id).await? {
            return Err(ApplicationError::not_found("Item", item_id));
        }

        tracing::info!(item_id = item_id, "Item deleted");

        Ok(DeletedResponse {
            deleted_id: item_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryItemRepository;
    use serde_json::Number;

    fn repo() -> Arc<dyn ItemRepositoryPort> {
        Arc::new(InMemoryItemRepository::new())
    }

    fn create(name: &str, price: i64) -> CreateItem {
        CreateItem {
            name: Some(name.to_string()),
            price: Some(Number::from(price)),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let handler = CreateItemHandler::new(repo());

        let first = handler.handle(create("pencil", 500)).await.unwrap();
        let second = handler.handle(create("eraser", 300)).await.unwrap();

        assert_eq!(first.id, 1);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_mutation() {
        let repo = repo();
        let handler = CreateItemHandler::new(repo.clone());

        let err = handler
            .handle(CreateItem {
                name: Some(String::new()),
                price: Some(Number::from(1)),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));

        let err = handler
            .handle(CreateItem {
                name: Some("pencil".to_string()),
                price: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));

        assert_eq!(repo.find_all().await.unwrap().len(), 0);

        // 失败的创建不消耗 id
        let item = handler.handle(create("pencil", 500)).await.unwrap();
        assert_eq!(item.id, 1);
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let handler = UpdateItemHandler::new(repo());
        let err = handler
            .handle(UpdateItem {
                item_id: 42,
                name: Some("ghost".to_string()),
                price: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Item",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let repo = repo();
        let created = CreateItemHandler::new(repo.clone())
            .handle(create("pencil", 500))
            .await
            .unwrap();

        let handler = DeleteItemHandler::new(repo.clone());
        let deleted = handler
            .handle(DeleteItem {
                item_id: created.id,
            })
            .await
            .unwrap();
        assert_eq!(deleted.deleted_id, created.id);

        let err = handler
            .handle(DeleteItem {
                item_id: created.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
