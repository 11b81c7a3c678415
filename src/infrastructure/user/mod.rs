//! User infrastructure: password hashing, storage-backed repository and the
//! account service used by the HTTP layer.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::StorageUserRepository;
pub use service::{RegisterRequest, UserService};
