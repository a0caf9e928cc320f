//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use crate::todo::domain::TodoSummary;
pub use lifecycle::{TodoLifecycleError, TodoLifecycleResult, TodoLifecycleService};
