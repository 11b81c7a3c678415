//! Storage-backed user repository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of UserRepository
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let matches = self
            .storage
            .find(&|u: &User| u.username() == username)
            .await?;

        Ok(matches.into_iter().next())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.username_exists(user.username()).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        self.storage.create(user).await
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        self.storage.update(user.clone()).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut users = self.storage.list().await?;
        users.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(users)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }
}
