//! Domain layer - Entities, rules and collaborator contracts

pub mod account;
pub mod coauthorship;
pub mod command_result;
pub mod error;
pub mod permission;
pub mod storage;
pub mod todo;
pub mod todo_list;
pub mod user;

pub use account::AccountService;
pub use coauthorship::{Coauthorship, CoauthorshipId, CoauthorshipRepository};
pub use command_result::{CommandResult, FieldError};
pub use error::DomainError;
pub use permission::{evaluate_access, Access};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use todo::{Todo, TodoId, TodoRepository, TodoView};
pub use todo_list::{TodoList, TodoListId, TodoListRepository, TodoListView};
pub use user::{Role, User, UserId, UserRepository, UserView};
