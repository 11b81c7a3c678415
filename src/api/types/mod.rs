//! Shared request/response types for the HTTP layer

pub mod error;
pub mod json;

pub use error::{check, ApiError, ApiErrorResponse};
pub use json::Json;
