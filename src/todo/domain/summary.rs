//! Dashboard record counts.

/// Record counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoSummary {
    /// Number of categories.
    pub categories: usize,
    /// Number of live to-dos.
    pub tasks: usize,
    /// Number of live to-dos due before today.
    pub overdue: usize,
    /// Number of archived records.
    pub done: usize,
}
