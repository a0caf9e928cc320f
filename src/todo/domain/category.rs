//! Category values.

use super::{CategoryId, MAX_NAME_LENGTH, Task, TodoDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, trimmed category name.
///
/// Names are compared exactly: `Work` and `work` are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated category name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyCategoryName`] when the value is empty
    /// after trimming, or [`TodoDomainError::CategoryNameTooLong`] when it
    /// exceeds 250 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TodoDomainError::EmptyCategoryName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(TodoDomainError::CategoryNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named grouping for to-dos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
}

impl Category {
    /// Builds a category from its stored identifier and name.
    #[must_use]
    pub const fn new(id: CategoryId, name: CategoryName) -> Self {
        Self { id, name }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the category name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }
}

/// Categories render as their name.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

/// A category together with the to-dos currently filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOverview {
    /// The category itself.
    pub category: Category,
    /// Live to-dos referencing the category, in insertion order.
    pub tasks: Vec<Task>,
}
