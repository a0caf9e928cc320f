//! Task lifecycle management: categories, to-dos and the done archive.
//!
//! A to-do is created, updated any number of times, and then either deleted
//! outright or completed. Completion moves it into the append-only archive
//! as a [`domain::DoneRecord`] that keeps the category name by value. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
