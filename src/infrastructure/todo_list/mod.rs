//! Todo list infrastructure implementations

mod repository;

pub use repository::StorageTodoListRepository;
