//! User domain
//!
//! Users own todo lists, may be granted coauthorship on lists owned by
//! others, and carry roles. The `Admin` role bypasses list ownership checks.

mod entity;
mod repository;
mod validation;

pub use entity::{Role, User, UserId, UserView};
pub use repository::UserRepository;
pub use validation::{validate_password, validate_user_id, validate_username, UserValidationError};
