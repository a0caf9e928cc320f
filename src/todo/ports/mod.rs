//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by lifecycle services.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
