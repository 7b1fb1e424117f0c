//! In-Memory User Repository Implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::{EntityId, NewUser, User, UserPatch};

use super::InMemoryTable;

/// 内存用户仓储，与商品仓储互相独立（各自的 id 计数器）
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: InMemoryTable<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: InMemoryTable::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        self.users.insert_with(|id| User::from_new(id, user))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(id))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.all())
    }

    async fn update(
        &self,
        id: EntityId,
        patch: UserPatch,
    ) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.modify(id, |user| user.apply(patch)))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        Ok(self.users.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_ids_independent_of_items() {
        let repo = InMemoryUserRepository::new();
        let new = NewUser::new(Some("soo".into()), Some("soo@test.com".into())).unwrap();
        let user = repo.insert(new).await.unwrap();
        assert_eq!(user.id, 1);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
        assert!(repo.find_by_id(1).await.unwrap().is_none());
    }
}
