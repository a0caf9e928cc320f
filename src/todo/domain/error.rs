//! Error types for lifecycle input validation.

use super::CategoryId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while validating category and to-do input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The category name exceeds the 250-character storage limit.
    #[error("category name exceeds 250 character limit: {0}")]
    CategoryNameTooLong(String),

    /// The to-do name is empty after trimming.
    #[error("to-do name must not be empty")]
    EmptyTaskName,

    /// The to-do name exceeds the 250-character storage limit.
    #[error("to-do name exceeds 250 character limit: {0}")]
    TaskNameTooLong(String),

    /// The due date field could not be parsed as `YYYY-MM-DD`.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// The due date lies before the validation date.
    #[error("due date {due_date} can't be in the past (today is {today})")]
    DueDateInPast {
        /// Submitted due date.
        due_date: NaiveDate,
        /// Date the input was validated against.
        today: NaiveDate,
    },

    /// The selected category is not among the known categories.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),
}
