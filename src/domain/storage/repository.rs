//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic storage trait for CRUD and predicate queries on any entity type
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Retrieves every entity matching the predicate
    async fn find(
        &self,
        predicate: &(dyn for<'p> Fn(&'p E) -> bool + Send + Sync),
    ) -> Result<Vec<E>, DomainError> {
        Ok(self.list().await?.into_iter().filter(|e| predicate(e)).collect())
    }

    /// Creates a new entity, returns error if already exists
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Updates an existing entity, returns error if not found
    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Deletes an entity by its key, returns true if deleted
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    /// Deletes every entity matching the predicate, returns the number removed
    async fn delete_where(
        &self,
        predicate: &(dyn for<'p> Fn(&'p E) -> bool + Send + Sync),
    ) -> Result<usize, DomainError> {
        let doomed = self.find(predicate).await?;
        let mut removed = 0;

        for entity in doomed {
            if self.delete(entity.key()).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Checks if an entity exists by its key
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Returns the count of entities
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }

    /// Clears all entities
    async fn clear(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::storage::entity::StorageKey;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Which operations a [`MockStorage`] should fail
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum FailOn {
        #[default]
        Nothing,
        Writes,
        Everything,
    }

    /// Mock storage for exercising store failures
    #[derive(Debug)]
    pub struct MockStorage<E>
    where
        E: StorageEntity,
    {
        entities: Mutex<HashMap<String, E>>,
        fail_on: Mutex<FailOn>,
    }

    impl<E> Default for MockStorage<E>
    where
        E: StorageEntity,
    {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<E> MockStorage<E>
    where
        E: StorageEntity,
    {
        pub fn new() -> Self {
            Self {
                entities: Mutex::new(HashMap::new()),
                fail_on: Mutex::new(FailOn::Nothing),
            }
        }

        pub fn with_entity(self, entity: E) -> Self {
            self.entities
                .lock()
                .unwrap()
                .insert(entity.key().as_str().to_string(), entity);
            self
        }

        pub fn fail_on(&self, fail_on: FailOn) {
            *self.fail_on.lock().unwrap() = fail_on;
        }

        fn check_read(&self) -> Result<(), DomainError> {
            if *self.fail_on.lock().unwrap() == FailOn::Everything {
                return Err(DomainError::storage("Mock storage configured to fail"));
            }
            Ok(())
        }

        fn check_write(&self) -> Result<(), DomainError> {
            if *self.fail_on.lock().unwrap() != FailOn::Nothing {
                return Err(DomainError::storage("Mock storage configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl<E> Storage<E> for MockStorage<E>
    where
        E: StorageEntity + 'static,
    {
        async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
            self.check_read()?;
            Ok(self.entities.lock().unwrap().get(key.as_str()).cloned())
        }

        async fn list(&self) -> Result<Vec<E>, DomainError> {
            self.check_read()?;
            Ok(self.entities.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, entity: E) -> Result<E, DomainError> {
            self.check_write()?;
            let key = entity.key().as_str().to_string();
            let mut entities = self.entities.lock().unwrap();

            if entities.contains_key(&key) {
                return Err(DomainError::conflict(format!(
                    "Entity with key '{}' already exists",
                    key
                )));
            }

            entities.insert(key, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: E) -> Result<E, DomainError> {
            self.check_write()?;
            let key = entity.key().as_str().to_string();
            let mut entities = self.entities.lock().unwrap();

            if !entities.contains_key(&key) {
                return Err(DomainError::not_found(format!(
                    "Entity with key '{}' not found",
                    key
                )));
            }

            entities.insert(key, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
            self.check_write()?;
            Ok(self.entities.lock().unwrap().remove(key.as_str()).is_some())
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_write()?;
            self.entities.lock().unwrap().clear();
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::todo_list::{TodoList, TodoListId};
        use crate::domain::user::UserId;

        fn list(title: &str, owner: &str) -> TodoList {
            TodoList::new(
                TodoListId::generate(),
                title,
                None,
                UserId::new(owner).unwrap(),
            )
        }

        #[tokio::test]
        async fn test_find_filters_by_predicate() {
            let storage = MockStorage::new()
                .with_entity(list("Groceries", "alice"))
                .with_entity(list("Chores", "alice"))
                .with_entity(list("Groceries", "bob"));

            let alice = UserId::new("alice").unwrap();
            let found = storage
                .find(&|l: &TodoList| l.created_by() == &alice)
                .await
                .unwrap();

            assert_eq!(found.len(), 2);
        }

        #[tokio::test]
        async fn test_delete_where_counts_removed() {
            let storage = MockStorage::new()
                .with_entity(list("Groceries", "alice"))
                .with_entity(list("Groceries", "bob"))
                .with_entity(list("Chores", "bob"));

            let removed = storage
                .delete_where(&|l: &TodoList| l.title() == "Groceries")
                .await
                .unwrap();

            assert_eq!(removed, 2);
            assert_eq!(storage.count().await.unwrap(), 1);
        }

        #[tokio::test]
        async fn test_fail_on_writes_keeps_reads_working() {
            let entity = list("Groceries", "alice");
            let storage = MockStorage::new().with_entity(entity.clone());
            storage.fail_on(FailOn::Writes);

            assert!(storage.get(entity.id()).await.unwrap().is_some());
            assert!(storage.update(entity).await.is_err());
        }

        #[tokio::test]
        async fn test_fail_on_everything() {
            let storage: MockStorage<TodoList> = MockStorage::new();
            storage.fail_on(FailOn::Everything);

            assert!(storage.list().await.is_err());
        }
    }
}
