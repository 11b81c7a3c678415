//! Todo list repository trait

use async_trait::async_trait;

use super::entity::{TodoList, TodoListId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for todo lists
#[async_trait]
pub trait TodoListRepository: Send + Sync + std::fmt::Debug {
    /// Get a list by ID
    async fn get(&self, id: &TodoListId) -> Result<Option<TodoList>, DomainError>;

    /// Persist a new list
    async fn create(&self, list: TodoList) -> Result<TodoList, DomainError>;

    /// Persist changes to an existing list
    async fn update(&self, list: TodoList) -> Result<TodoList, DomainError>;

    /// Delete a list by ID
    async fn delete(&self, id: &TodoListId) -> Result<bool, DomainError>;

    /// Lists created by the given user, oldest first
    async fn list_by_creator(&self, creator: &UserId) -> Result<Vec<TodoList>, DomainError>;

    /// Lists created by `creator` whose title equals `title` exactly
    async fn find_by_title(
        &self,
        creator: &UserId,
        title: &str,
    ) -> Result<Vec<TodoList>, DomainError>;
}
