//! Todo item domain

mod entity;
mod repository;

pub use entity::{validate_todo_text, Todo, TodoId, TodoValidationError, TodoView, MAX_TODO_TEXT_LENGTH};
pub use repository::TodoRepository;
