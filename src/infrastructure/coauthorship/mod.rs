//! Coauthorship infrastructure implementations

mod repository;

pub use repository::StorageCoauthorshipRepository;
