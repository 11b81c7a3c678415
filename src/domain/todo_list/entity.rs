//! Todo list entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Todo list identifier (UUID text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoListId(String);

impl TodoListId {
    /// Parse an identifier received from a caller
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        uuid::Uuid::parse_str(&id)
            .map_err(|e| DomainError::invalid_id(format!("Invalid todo list id '{}': {}", id, e)))?;
        Ok(Self(id))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoListId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoListId> for String {
    fn from(id: TodoListId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TodoListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TodoListId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named list owned by the user who created it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    id: TodoListId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TodoList {
    /// Create a list; callers pass already trimmed and validated values
    pub fn new(
        id: TodoListId,
        title: impl Into<String>,
        description: Option<String>,
        created_by: UserId,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            title: title.into(),
            description,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &TodoListId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_created_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    /// Replace title and description; the creator never changes
    pub fn rename(&mut self, title: impl Into<String>, description: Option<String>) {
        self.title = title.into();
        self.description = description;
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for TodoList {
    type Key = TodoListId;

    const COLLECTION: &'static str = "todo_lists";

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[test]
    fn test_list_id_parses_uuid() {
        let id = TodoListId::generate();
        assert_eq!(TodoListId::new(id.as_str()).unwrap(), id);
        assert!(TodoListId::new("not-a-uuid").is_err());
    }

    #[test]
    fn test_new_list() {
        let list = TodoList::new(
            TodoListId::generate(),
            "Groceries",
            Some("weekly".to_string()),
            owner(),
        );

        assert_eq!(list.title(), "Groceries");
        assert_eq!(list.description(), Some("weekly"));
        assert!(list.is_created_by(&owner()));
        assert!(!list.is_created_by(&UserId::new("bob").unwrap()));
    }

    #[test]
    fn test_rename_keeps_creator() {
        let mut list = TodoList::new(TodoListId::generate(), "Groceries", None, owner());
        let before = list.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(5));
        list.rename("Shopping", Some("all stores".to_string()));

        assert_eq!(list.title(), "Shopping");
        assert_eq!(list.description(), Some("all stores"));
        assert_eq!(list.created_by(), &owner());
        assert!(list.updated_at() > before);
    }

    #[test]
    fn test_deserialize_rejects_bad_id() {
        let json = serde_json::json!({
            "id": "nope",
            "title": "x",
            "created_by": "alice",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });

        assert!(serde_json::from_value::<TodoList>(json).is_err());
    }
}
