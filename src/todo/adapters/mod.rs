//! Adapter implementations of the lifecycle repository port.

pub mod memory;
pub mod sqlite;
