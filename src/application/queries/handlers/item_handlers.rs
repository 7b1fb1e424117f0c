//! Item Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::application::queries::{GetItem, ListItems};
use crate::domain::Item;

/// GetItem Handler
pub struct GetItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl GetItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, query: GetItem) -> Result<Item, ApplicationError> {
        self.item_repo
            .find_by_id(query.item_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Item", query.item_id))
    }
}

/// ListItems Handler
pub struct ListItemsHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl ListItemsHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, query: ListItems) -> Result<Vec<Item>, ApplicationError> {
        if query.force_error {
            return Err(ApplicationError::FaultInjected("force_error=true on item listing"));
        }

        Ok(self.item_repo.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewItem;
    use crate::infrastructure::memory::InMemoryItemRepository;
    use serde_json::Number;

    async fn seeded() -> Arc<dyn ItemRepositoryPort> {
        let repo = Arc::new(InMemoryItemRepository::new());
        for (name, price) in [("pencil", 500), ("eraser", 300), ("ruler", 0)] {
            let new = NewItem::new(Some(name.to_string()), Some(Number::from(price))).unwrap();
            repo.insert(new).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let handler = ListItemsHandler::new(seeded().await);
        let items = handler.handle(ListItems::default()).await.unwrap();

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["pencil", "eraser", "ruler"]);
    }

    #[tokio::test]
    async fn test_force_error_is_injected_fault() {
        let handler = ListItemsHandler::new(seeded().await);
        let err = handler
            .handle(ListItems { force_error: true })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::FaultInjected(_)));
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let handler = GetItemHandler::new(seeded().await);
        assert_eq!(handler.handle(GetItem { item_id: 2 }).await.unwrap().name, "eraser");

        let err = handler.handle(GetItem { item_id: 99 }).await.unwrap_err();
        assert_eq!(err.to_string(), "Item with id=99 not found");
    }
}
