//! Coauthorship grant record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::todo_list::TodoListId;
use crate::domain::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoauthorshipId(String);

impl CoauthorshipId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StorageKey for CoauthorshipId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Grants `user_id` access to `list_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coauthorship {
    id: CoauthorshipId,
    list_id: TodoListId,
    user_id: UserId,
    created_at: DateTime<Utc>,
}

impl Coauthorship {
    pub fn new(list_id: TodoListId, user_id: UserId) -> Self {
        Self {
            id: CoauthorshipId::generate(),
            list_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &CoauthorshipId {
        &self.id
    }

    pub fn list_id(&self) -> &TodoListId {
        &self.list_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this record links exactly this list and user
    pub fn links(&self, list_id: &TodoListId, user_id: &UserId) -> bool {
        &self.list_id == list_id && &self.user_id == user_id
    }
}

impl StorageEntity for Coauthorship {
    type Key = CoauthorshipId;

    const COLLECTION: &'static str = "todo_list_coauthorships";

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let list = TodoListId::generate();
        let bob = UserId::new("bob").unwrap();
        let grant = Coauthorship::new(list.clone(), bob.clone());

        assert!(grant.links(&list, &bob));
        assert!(!grant.links(&TodoListId::generate(), &bob));
        assert!(!grant.links(&list, &UserId::new("carol").unwrap()));
    }

    #[test]
    fn test_ids_are_unique() {
        let list = TodoListId::generate();
        let bob = UserId::new("bob").unwrap();

        let a = Coauthorship::new(list.clone(), bob.clone());
        let b = Coauthorship::new(list, bob);
        assert_ne!(a.id(), b.id());
    }
}
