//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record produced by voice capture or manual
//!   entry.
//! - Own the title validation rule shared by store and repository.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is never empty after phrase normalization.
//! - `due_date` is a calendar date without time-of-day.

use crate::parse::normalize::normalize_phrase;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Kept as a string so externally generated ids round-trip unchanged.
pub type TaskId = String;

/// Generates a new identifier: a UUIDv7, i.e. a millisecond timestamp
/// followed by random bits, unique across rapid successive calls.
pub fn new_task_id() -> TaskId {
    Uuid::now_v7().to_string()
}

/// Validation failures for task writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty once normalized.
    EmptyTitle,
    /// Another task already uses this identifier.
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::DuplicateId(id) => write!(f, "task id already exists: {id}"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// User-facing text, trimmed.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates an incomplete task with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(new_task_id(), title)
    }

    /// Creates an incomplete task with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into().trim().to_string(),
            description: None,
            due_date: None,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Checks the title rule.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title normalizes to an empty string.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)
    }

    /// Returns whether title or description contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercase.
    pub fn mentions(&self, needle_lower: &str) -> bool {
        if self.title.to_lowercase().contains(needle_lower) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle_lower))
    }
}

/// Partial update for an existing task.
///
/// `None` leaves a field untouched; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskEdit {
    /// Applies this edit to a copy of `task`.
    ///
    /// # Errors
    /// - `EmptyTitle` when the new title normalizes to empty.
    pub fn apply_to(&self, task: &Task) -> Result<Task, TaskValidationError> {
        let mut updated = task.clone();
        if let Some(title) = &self.title {
            validate_title(title)?;
            updated.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(due_date) = self.due_date {
            updated.due_date = due_date;
        }
        Ok(updated)
    }
}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if normalize_phrase(title).is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}
