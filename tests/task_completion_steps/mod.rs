//! Step definitions for to-do completion scenarios.

mod given;
mod then;
mod when;
pub mod world;
