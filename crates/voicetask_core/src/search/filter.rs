//! Completion filter and text search composition for task views.
//!
//! # Invariants
//! - An empty search text matches every task.
//! - Matching never reorders; callers keep store order.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Completion filter applied to task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl TaskFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        }
    }

    /// Returns whether `task` passes this filter.
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Incomplete => !task.completed,
        }
    }
}

/// Unknown filter label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTaskFilterError(pub String);

impl Display for ParseTaskFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported task filter `{}`; expected all|completed|incomplete",
            self.0
        )
    }
}

impl Error for ParseTaskFilterError {}

impl FromStr for TaskFilter {
    type Err = ParseTaskFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "incomplete" | "todo" | "open" => Ok(Self::Incomplete),
            other => Err(ParseTaskFilterError(other.to_string())),
        }
    }
}

/// One view request: filter plus search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub filter: TaskFilter,
    /// Case-insensitive substring matched against title and description.
    pub text: String,
}

impl TaskQuery {
    pub fn new(filter: TaskFilter, text: impl Into<String>) -> Self {
        Self {
            filter,
            text: text.into(),
        }
    }

    /// Builds a reusable matcher with the search text lowercased once.
    pub fn matcher(&self) -> TaskMatcher {
        TaskMatcher {
            filter: self.filter,
            needle: self.text.to_lowercase(),
        }
    }
}

/// Prepared form of [`TaskQuery`].
#[derive(Debug, Clone)]
pub struct TaskMatcher {
    filter: TaskFilter,
    needle: String,
}

impl TaskMatcher {
    pub fn matches(&self, task: &Task) -> bool {
        self.filter.admits(task) && (self.needle.is_empty() || task.mentions(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskFilter, TaskQuery};
    use crate::model::task::Task;

    #[test]
    fn filter_parses_labels() {
        assert_eq!("ALL".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!(" done ".parse::<TaskFilter>().unwrap(), TaskFilter::Completed);
        assert_eq!("incomplete".parse::<TaskFilter>().unwrap(), TaskFilter::Incomplete);
        assert!("later".parse::<TaskFilter>().is_err());
    }

    #[test]
    fn matcher_checks_description_too() {
        let task = Task::new("Call plumber").with_description("Leaking KITCHEN sink");
        assert!(TaskQuery::new(TaskFilter::All, "kitchen").matcher().matches(&task));
        assert!(!TaskQuery::new(TaskFilter::Completed, "kitchen").matcher().matches(&task));
        assert!(!TaskQuery::new(TaskFilter::All, "garage").matcher().matches(&task));
    }
}
