//! Storage-backed todo list repository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::todo_list::{TodoList, TodoListId, TodoListRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct StorageTodoListRepository {
    storage: Arc<dyn Storage<TodoList>>,
}

impl StorageTodoListRepository {
    pub fn new(storage: Arc<dyn Storage<TodoList>>) -> Self {
        Self { storage }
    }
}

fn oldest_first(mut lists: Vec<TodoList>) -> Vec<TodoList> {
    lists.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.title().cmp(b.title()))
    });
    lists
}

#[async_trait]
impl TodoListRepository for StorageTodoListRepository {
    async fn get(&self, id: &TodoListId) -> Result<Option<TodoList>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, list: TodoList) -> Result<TodoList, DomainError> {
        self.storage.create(list).await
    }

    async fn update(&self, list: TodoList) -> Result<TodoList, DomainError> {
        self.storage.update(list).await
    }

    async fn delete(&self, id: &TodoListId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list_by_creator(&self, creator: &UserId) -> Result<Vec<TodoList>, DomainError> {
        let lists = self
            .storage
            .find(&|l: &TodoList| l.is_created_by(creator))
            .await?;

        Ok(oldest_first(lists))
    }

    async fn find_by_title(
        &self,
        creator: &UserId,
        title: &str,
    ) -> Result<Vec<TodoList>, DomainError> {
        let lists = self
            .storage
            .find(&|l: &TodoList| l.is_created_by(creator) && l.title() == title)
            .await?;

        Ok(oldest_first(lists))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageTodoListRepository {
        StorageTodoListRepository::new(Arc::new(InMemoryStorage::<TodoList>::new()))
    }

    fn uid(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn list(title: &str, owner: &str) -> TodoList {
        TodoList::new(TodoListId::generate(), title, None, uid(owner))
    }

    #[tokio::test]
    async fn test_list_by_creator() {
        let repo = create_repo();
        repo.create(list("Groceries", "alice")).await.unwrap();
        repo.create(list("Chores", "alice")).await.unwrap();
        repo.create(list("Groceries", "bob")).await.unwrap();

        assert_eq!(repo.list_by_creator(&uid("alice")).await.unwrap().len(), 2);
        assert_eq!(repo.list_by_creator(&uid("bob")).await.unwrap().len(), 1);
        assert!(repo.list_by_creator(&uid("carol")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_title_is_exact_and_scoped() {
        let repo = create_repo();
        repo.create(list("Groceries", "alice")).await.unwrap();
        repo.create(list("Groceries", "bob")).await.unwrap();

        assert_eq!(
            repo.find_by_title(&uid("alice"), "Groceries").await.unwrap().len(),
            1
        );
        assert!(repo
            .find_by_title(&uid("alice"), "groceries")
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .find_by_title(&uid("alice"), "Groceries ")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = create_repo();
        let mut created = repo.create(list("Groceries", "alice")).await.unwrap();

        created.rename("Shopping", None);
        repo.update(created.clone()).await.unwrap();
        assert_eq!(
            repo.get(created.id()).await.unwrap().unwrap().title(),
            "Shopping"
        );

        assert!(repo.delete(created.id()).await.unwrap());
        assert!(repo.get(created.id()).await.unwrap().is_none());
    }
}
