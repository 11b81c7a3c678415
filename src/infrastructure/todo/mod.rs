//! Todo item infrastructure implementations

mod repository;

pub use repository::StorageTodoRepository;
