//! Coauthorship repository trait

use async_trait::async_trait;

use super::entity::Coauthorship;
use crate::domain::todo_list::TodoListId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

#[async_trait]
pub trait CoauthorshipRepository: Send + Sync + std::fmt::Debug {
    async fn create(&self, coauthorship: Coauthorship) -> Result<Coauthorship, DomainError>;

    /// Grants on one list
    async fn list_by_list(&self, list_id: &TodoListId) -> Result<Vec<Coauthorship>, DomainError>;

    /// Grants held by one user
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Coauthorship>, DomainError>;

    /// The first grant linking this list and user, if any
    async fn find(
        &self,
        list_id: &TodoListId,
        user_id: &UserId,
    ) -> Result<Option<Coauthorship>, DomainError>;

    /// Remove one grant record, returns true if it existed
    async fn delete(&self, coauthorship: &Coauthorship) -> Result<bool, DomainError>;

    /// Remove every grant on one list, returns how many were removed
    async fn delete_by_list(&self, list_id: &TodoListId) -> Result<usize, DomainError>;
}
