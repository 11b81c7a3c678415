//! Todo repository trait

use async_trait::async_trait;

use super::entity::{Todo, TodoId};
use crate::domain::todo_list::TodoListId;
use crate::domain::DomainError;

#[async_trait]
pub trait TodoRepository: Send + Sync + std::fmt::Debug {
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, DomainError>;

    async fn create(&self, todo: Todo) -> Result<Todo, DomainError>;

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError>;

    async fn delete(&self, id: &TodoId) -> Result<bool, DomainError>;

    /// Items of one list, oldest first
    async fn list_by_list(&self, list_id: &TodoListId) -> Result<Vec<Todo>, DomainError>;

    /// Remove every item of one list, returns how many were removed
    async fn delete_by_list(&self, list_id: &TodoListId) -> Result<usize, DomainError>;
}
