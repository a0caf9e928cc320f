//! To-do values and the validated draft used for inserts and updates.

use super::{CategoryId, MAX_NAME_LENGTH, TaskId, TodoDomainError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, trimmed to-do name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated to-do name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTaskName`] when the value is empty
    /// after trimming, or [`TodoDomainError::TaskNameTooLong`] when it
    /// exceeds 250 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TodoDomainError::EmptyTaskName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(TodoDomainError::TaskNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated field values for creating or replacing a to-do.
///
/// Only [`super::validate_task_input`] produces drafts, so holding one means
/// the due date was checked against the calendar at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    name: TaskName,
    category_id: Option<CategoryId>,
    due_date: NaiveDate,
}

impl TaskDraft {
    pub(super) const fn new(
        name: TaskName,
        category_id: Option<CategoryId>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            name,
            category_id,
            due_date,
        }
    }

    /// Returns the validated name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the selected category, if any.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// A live to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    category_id: Option<CategoryId>,
    due_date: NaiveDate,
}

/// Parameter object for reconstructing a stored to-do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: TaskId,
    /// Stored name.
    pub name: TaskName,
    /// Stored category reference.
    pub category_id: Option<CategoryId>,
    /// Stored due date.
    pub due_date: NaiveDate,
}

impl Task {
    /// Creates a to-do from a freshly assigned identifier and a draft.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        let TaskDraft {
            name,
            category_id,
            due_date,
        } = draft;
        Self {
            id,
            name,
            category_id,
            due_date,
        }
    }

    /// Reconstructs a to-do from storage. Stored due dates are not
    /// re-validated.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            category_id: data.category_id,
            due_date: data.due_date,
        }
    }

    /// Returns the to-do identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the to-do name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the category reference, if any.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns `true` when the due date lies before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}
