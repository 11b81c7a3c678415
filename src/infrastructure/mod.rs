//! Infrastructure layer - storage backends, repositories and services

pub mod account;
pub mod auth;
pub mod coauthorship;
pub mod logging;
pub mod services;
pub mod storage;
pub mod todo;
pub mod todo_list;
pub mod user;
