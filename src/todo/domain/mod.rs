//! Domain model for categories, to-dos and completed records.
//!
//! Identifiers are assigned by the store, so the domain only ever sees
//! validated input ([`CategoryName`], [`TaskDraft`]) on the way in and
//! complete records on the way out.

mod category;
mod done;
mod error;
mod ids;
mod summary;
mod task;
mod validation;

pub use category::{Category, CategoryName, CategoryOverview};
pub use done::{CompletionSnapshot, DoneRecord};
pub use error::TodoDomainError;
pub use ids::{CategoryId, DoneRecordId, TaskId};
pub use summary::TodoSummary;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskName};
pub use validation::{TaskInput, parse_due_date, validate_task_input};

/// Maximum length for category and to-do names, matching the `VARCHAR(250)`
/// columns.
pub const MAX_NAME_LENGTH: usize = 250;
