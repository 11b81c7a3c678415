//! Storage-backed coauthorship repository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::coauthorship::{Coauthorship, CoauthorshipRepository};
use crate::domain::storage::Storage;
use crate::domain::todo_list::TodoListId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct StorageCoauthorshipRepository {
    storage: Arc<dyn Storage<Coauthorship>>,
}

impl StorageCoauthorshipRepository {
    pub fn new(storage: Arc<dyn Storage<Coauthorship>>) -> Self {
        Self { storage }
    }

    async fn matching(
        &self,
        predicate: &(dyn Fn(&Coauthorship) -> bool + Send + Sync),
    ) -> Result<Vec<Coauthorship>, DomainError> {
        let mut grants = self.storage.find(predicate).await?;
        grants.sort_by_key(|c| c.created_at());
        Ok(grants)
    }
}

#[async_trait]
impl CoauthorshipRepository for StorageCoauthorshipRepository {
    async fn create(&self, coauthorship: Coauthorship) -> Result<Coauthorship, DomainError> {
        self.storage.create(coauthorship).await
    }

    async fn list_by_list(&self, list_id: &TodoListId) -> Result<Vec<Coauthorship>, DomainError> {
        self.matching(&|c: &Coauthorship| c.list_id() == list_id)
            .await
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Coauthorship>, DomainError> {
        self.matching(&|c: &Coauthorship| c.user_id() == user_id)
            .await
    }

    async fn find(
        &self,
        list_id: &TodoListId,
        user_id: &UserId,
    ) -> Result<Option<Coauthorship>, DomainError> {
        let grants = self
            .matching(&|c: &Coauthorship| c.links(list_id, user_id))
            .await?;

        Ok(grants.into_iter().next())
    }

    async fn delete(&self, coauthorship: &Coauthorship) -> Result<bool, DomainError> {
        self.storage.delete(coauthorship.id()).await
    }

    async fn delete_by_list(&self, list_id: &TodoListId) -> Result<usize, DomainError> {
        self.storage
            .delete_where(&|c: &Coauthorship| c.list_id() == list_id)
            .await
    }
}
