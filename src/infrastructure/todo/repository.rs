//! Storage-backed todo repository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::todo::{Todo, TodoId, TodoRepository};
use crate::domain::todo_list::TodoListId;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct StorageTodoRepository {
    storage: Arc<dyn Storage<Todo>>,
}

impl StorageTodoRepository {
    pub fn new(storage: Arc<dyn Storage<Todo>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TodoRepository for StorageTodoRepository {
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        self.storage.create(todo).await
    }

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError> {
        self.storage.update(todo).await
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list_by_list(&self, list_id: &TodoListId) -> Result<Vec<Todo>, DomainError> {
        let mut todos = self
            .storage
            .find(&|t: &Todo| t.list_id() == list_id)
            .await?;

        todos.sort_by_key(|t| t.created_at());
        Ok(todos)
    }

    async fn delete_by_list(&self, list_id: &TodoListId) -> Result<usize, DomainError> {
        self.storage
            .delete_where(&|t: &Todo| t.list_id() == list_id)
            .await
    }
}
