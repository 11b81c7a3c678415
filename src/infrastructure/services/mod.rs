//! Request-scoped application services

mod list_service;
mod todo_service;

pub use list_service::{CreateListArgs, ListService, ListServiceDeps, UpdateListArgs};
pub use todo_service::{CreateTodoArgs, TodoService, UpdateTodoArgs};
