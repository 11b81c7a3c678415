//! Todo item entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::todo_list::TodoListId;
use crate::domain::DomainError;

pub const MAX_TODO_TEXT_LENGTH: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    #[error("Text is required.")]
    EmptyText,

    #[error("Text must be {0} characters or fewer.")]
    TextTooLong(usize),
}

/// Validate item text as given; callers trim first
pub fn validate_todo_text(text: &str) -> Result<(), TodoValidationError> {
    if text.is_empty() {
        return Err(TodoValidationError::EmptyText);
    }

    if text.chars().count() > MAX_TODO_TEXT_LENGTH {
        return Err(TodoValidationError::TextTooLong(MAX_TODO_TEXT_LENGTH));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        uuid::Uuid::parse_str(&id)
            .map_err(|e| DomainError::invalid_id(format!("Invalid todo id '{}': {}", id, e)))?;
        Ok(Self(id))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TodoId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// One item on a todo list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    list_id: TodoListId,
    text: String,
    #[serde(default)]
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: TodoId, list_id: TodoListId, text: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            list_id,
            text: text.into(),
            done: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn list_id(&self) -> &TodoListId {
        &self.list_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch();
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Todo {
    type Key = TodoId;

    const COLLECTION: &'static str = "todos";

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub id: String,
    pub text: String,
    pub done: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().as_str().to_string(),
            text: todo.text().to_string(),
            done: todo.is_done(),
        }
    }
}
