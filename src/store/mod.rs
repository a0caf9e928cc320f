//! SQLite store handle shared by the lifecycle and authentication adapters.
//!
//! The pool is opened once at startup, passed explicitly to every repository,
//! and released when the last clone is dropped.

mod pool;
pub(crate) mod schema;

pub use pool::{CREATE_SCHEMA_SQL, StoreError, StorePool, apply_schema, open_pool};
