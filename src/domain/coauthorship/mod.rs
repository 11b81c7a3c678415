//! Coauthorship domain
//!
//! A coauthorship grants one user owner-equivalent access to one list.

mod entity;
mod repository;

pub use entity::{Coauthorship, CoauthorshipId};
pub use repository::CoauthorshipRepository;
