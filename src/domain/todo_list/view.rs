//! Presentation projection of a todo list

use serde::{Deserialize, Serialize};

use super::entity::TodoList;
use crate::domain::todo::TodoView;
use crate::domain::user::UserView;

/// Flattened list with its owner, items and coauthors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_by: UserView,
    pub created_at: String,
    pub todos: Vec<TodoView>,
    pub coauthors: Vec<UserView>,
}

impl TodoListView {
    pub fn new(
        list: &TodoList,
        created_by: UserView,
        todos: Vec<TodoView>,
        coauthors: Vec<UserView>,
    ) -> Self {
        Self {
            id: list.id().as_str().to_string(),
            title: list.title().to_string(),
            description: list.description().map(String::from),
            created_by,
            created_at: list.created_at().to_rfc3339(),
            todos,
            coauthors,
        }
    }
}
