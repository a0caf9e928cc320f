//! Adapter implementations of the authentication ports.

pub mod hasher;
pub mod memory;
pub mod sqlite;
