//! Form-level validation for to-do input.

use super::{Category, CategoryId, TaskDraft, TaskName, TodoDomainError};
use chrono::NaiveDate;

/// Date format submitted by HTML date inputs.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unvalidated to-do fields as collected by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    name: String,
    category_id: Option<CategoryId>,
    due_date: NaiveDate,
}

impl TaskInput {
    /// Creates input with no category selected.
    #[must_use]
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            category_id: None,
            due_date,
        }
    }

    /// Selects a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Returns the submitted name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the selected category, if any.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns the submitted due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Parses a due date submitted as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidDueDate`] when the field is blank or not
/// a calendar date.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, TodoDomainError> {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT)
        .map_err(|_| TodoDomainError::InvalidDueDate(raw.to_owned()))
}

/// Validates to-do input against the currently known categories and the
/// calendar date `today`.
///
/// Fields are checked in form order (name, category, due date) and the first
/// failure is returned. A due date equal to `today` is accepted.
///
/// # Errors
///
/// Returns [`TodoDomainError::EmptyTaskName`] or
/// [`TodoDomainError::TaskNameTooLong`] for a bad name,
/// [`TodoDomainError::UnknownCategory`] when the selected category is not in
/// `categories`, and [`TodoDomainError::DueDateInPast`] when the due date is
/// before `today`.
pub fn validate_task_input(
    input: &TaskInput,
    categories: &[Category],
    today: NaiveDate,
) -> Result<TaskDraft, TodoDomainError> {
    let name = TaskName::new(input.name.as_str())?;

    if let Some(category_id) = input.category_id
        && !categories.iter().any(|category| category.id() == category_id)
    {
        return Err(TodoDomainError::UnknownCategory(category_id));
    }

    if input.due_date < today {
        return Err(TodoDomainError::DueDateInPast {
            due_date: input.due_date,
            today,
        });
    }

    Ok(TaskDraft::new(name, input.category_id, input.due_date))
}
