//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::domain::{NewUser, User, UserPatch};

use super::DeletedResponse;

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let new_user = NewUser::new(command.username, command.email)?;
        let username = new_user.username().to_string();

        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = user.id, username = %username, "User created");

        Ok(user)
    }
}

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<User, ApplicationError> {
        let user_id = command.user_id;
        let patch = UserPatch {
            username: command.username,
            email: command.email,
        };

        let user = self
            .user_repo
            .update(user_id, patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", user_id))?;

        tracing::info!(user_id = user_id, "User updated");

        Ok(user)
    }
}

/// DeleteUser Handler
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<DeletedResponse, ApplicationError> {
        let user_id = command.user_id;

        if !self.user_repo.delete(user_id).await? {
            return Err(ApplicationError::not_found("User", user_id));
        }

        tracing::info!(user_id = user_id, "User deleted");

        Ok(DeletedResponse { deleted_id: user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_user_lifecycle() {
        let repo: Arc<dyn UserRepositoryPort> = Arc::new(InMemoryUserRepository::new());

        let user = CreateUserHandler::new(repo.clone())
            .handle(CreateUser {
                username: Some("soo".to_string()),
                email: Some("soo@test.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(user.id, 1);

        let updated = UpdateUserHandler::new(repo.clone())
            .handle(UpdateUser {
                user_id: user.id,
                username: Some("soo2".to_string()),
                email: None,
            })
            .await
            .unwrap();
        assert_eq!(updated.username, "soo2");
        assert_eq!(updated.email, "soo@test.com");

        let deleted = DeleteUserHandler::new(repo.clone())
            .handle(DeleteUser { user_id: user.id })
            .await
            .unwrap();
        assert_eq!(deleted.deleted_id, 1);
        assert_eq!(repo.find_all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_user_requires_email() {
        let repo: Arc<dyn UserRepositoryPort> = Arc::new(InMemoryUserRepository::new());
        let err = CreateUserHandler::new(repo.clone())
            .handle(CreateUser {
                username: Some("soo".to_string()),
                email: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "username and email are required");
        assert_eq!(repo.find_all().await.unwrap().len(), 0);
    }
}
