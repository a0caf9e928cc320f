//! gotdone: personal to-do tracking core.
//!
//! Users register and log in, file to-dos under categories with due dates,
//! and mark them done, which moves them into an append-only archive. The
//! crate owns the relational schema, the data operations an HTTP layer calls
//! into, and session-based authentication. Rendering and routing live
//! elsewhere.
//!
//! # Architecture
//!
//! Each feature module follows hexagonal architecture:
//!
//! - **Domain**: validated values and pure rules
//! - **Ports**: async repository and store traits
//! - **Adapters**: SQLite (diesel) and in-memory implementations
//! - **Services**: orchestration over the ports
//!
//! # Modules
//!
//! - [`todo`]: categories, to-dos and the done archive
//! - [`auth`]: accounts, password hashing and sessions
//! - [`store`]: connection pool and schema bootstrap
//! - [`app`]: explicit open and close of the wired application
//! - [`config`], [`telemetry`], [`error`]: ambient concerns

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod todo;
