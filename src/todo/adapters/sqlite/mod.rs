//! SQLite adapters for lifecycle persistence.

mod models;
mod repository;

pub use repository::SqliteTodoRepository;
