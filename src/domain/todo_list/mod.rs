//! Todo list domain
//!
//! A list has exactly one creator, fixed at creation. Titles are unique per
//! creator; other users reach a list through coauthorship or the `Admin` role.

mod entity;
mod repository;
mod validation;
mod view;

pub use entity::{TodoList, TodoListId};
pub use repository::TodoListRepository;
pub use validation::{
    validate_description, validate_list_args, validate_title, TodoListValidationError,
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};
pub use view::TodoListView;
