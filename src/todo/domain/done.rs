//! Archived completion records.

use super::{DoneRecordId, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Values copied out of a to-do at the moment it is completed.
///
/// The category name is held by value. Renaming or deleting the category
/// later leaves the snapshot unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSnapshot {
    name: String,
    category_name: Option<String>,
    completed_on: NaiveDate,
}

impl CompletionSnapshot {
    /// Captures a snapshot of `task` filed under `category_name`.
    #[must_use]
    pub fn capture(task: &Task, category_name: Option<&str>, completed_on: NaiveDate) -> Self {
        Self {
            name: task.name().as_str().to_owned(),
            category_name: category_name.map(str::to_owned),
            completed_on,
        }
    }

    /// Rebuilds a snapshot from archived columns.
    #[must_use]
    pub const fn from_persisted(
        name: String,
        category_name: Option<String>,
        completed_on: NaiveDate,
    ) -> Self {
        Self {
            name,
            category_name,
            completed_on,
        }
    }

    /// Returns the completed to-do's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category name at completion time, if the to-do had one.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    /// Returns the completion date.
    #[must_use]
    pub const fn completed_on(&self) -> NaiveDate {
        self.completed_on
    }
}

/// An immutable entry in the done archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoneRecord {
    id: DoneRecordId,
    #[serde(flatten)]
    snapshot: CompletionSnapshot,
}

impl DoneRecord {
    /// Builds an archive entry from its identifier and snapshot.
    #[must_use]
    pub const fn new(id: DoneRecordId, snapshot: CompletionSnapshot) -> Self {
        Self { id, snapshot }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> DoneRecordId {
        self.id
    }

    /// Returns the completed to-do's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.snapshot.name()
    }

    /// Returns the category name captured at completion time.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.snapshot.category_name()
    }

    /// Returns the completion date.
    #[must_use]
    pub const fn completed_on(&self) -> NaiveDate {
        self.snapshot.completed_on()
    }

    /// Returns the underlying snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &CompletionSnapshot {
        &self.snapshot
    }
}
