//! Task use-case service.
//!
//! # Responsibility
//! - Run the voice capture flow: segment, resolve due dates, add, persist.
//! - Persist the full snapshot after every successful mutation.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - A failed mutation is neither persisted nor left in the store: any
//!   validation or save error restores the collection held before the call.
//! - Mutations through one service are expected to be serialized by the
//!   caller; a rollback replaces the whole collection.
//! - Transcript text and titles are never logged.

use crate::model::task::{Task, TaskEdit, TaskId, TaskValidationError};
use crate::parse::due_date::resolve_due_date;
use crate::parse::segment::segment_transcript;
use crate::repo::task_repo::{RepoError, TaskRepository};
use crate::search::filter::TaskFilter;
use crate::store::task_store::TaskStore;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, TaskServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Rejected write; the store is unchanged.
    Validation(TaskValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Request model for manual task entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Task service facade over a store and its repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    store: TaskStore,
}

impl<R: TaskRepository> TaskService<R> {
    /// Loads the persisted snapshot into a fresh store.
    ///
    /// # Errors
    /// - Repository read errors.
    /// - Validation errors when the snapshot holds duplicate ids.
    pub fn load(repo: R) -> ServiceResult<Self> {
        let tasks = repo.load_tasks()?;
        let count = tasks.len();
        let store = TaskStore::from_tasks(tasks)?;
        info!("event=tasks_load module=service status=ok count={count}");
        Ok(Self { repo, store })
    }

    /// Read access to the owned store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Turns one transcript into tasks dated relative to `today`.
    ///
    /// Returns the created tasks in segmentation order. An empty transcript
    /// creates nothing and skips persistence. On error no task from this
    /// transcript is kept.
    pub fn capture_transcript(&self, transcript: &str, today: NaiveDate) -> ServiceResult<Vec<Task>> {
        let started_at = Instant::now();
        let phrases = segment_transcript(transcript);
        if phrases.is_empty() {
            info!("event=transcript_capture module=service status=empty");
            return Ok(Vec::new());
        }

        let created = self.commit(|store| {
            let mut created = Vec::with_capacity(phrases.len());
            for phrase in phrases {
                let due_date = resolve_due_date(&phrase, today);
                let task = Task::new(phrase).with_due_date(due_date);
                store.add(task.clone())?;
                created.push(task);
            }
            Ok((created, true))
        })?;

        info!(
            "event=transcript_capture module=service status=ok tasks={} dated={} duration_ms={}",
            created.len(),
            created.iter().filter(|task| task.due_date.is_some()).count(),
            started_at.elapsed().as_millis()
        );
        Ok(created)
    }

    /// Adds one manually entered task.
    pub fn add_task(&self, request: NewTaskRequest) -> ServiceResult<TaskId> {
        let mut task = Task::new(request.title).with_due_date(request.due_date);
        task.description = request.description;
        self.commit(|store| Ok((store.add(task)?, true)))
    }

    /// Flips completion; returns `false` for an unknown id.
    pub fn toggle_completion(&self, id: &str) -> ServiceResult<bool> {
        self.commit(|store| {
            let changed = store.toggle_completion(id);
            Ok((changed, changed))
        })
    }

    /// Deletes one task; returns `false` for an unknown id.
    pub fn delete_task(&self, id: &str) -> ServiceResult<bool> {
        self.commit(|store| {
            let changed = store.delete(id);
            Ok((changed, changed))
        })
    }

    /// Edits one task; returns `false` for an unknown id.
    pub fn edit_task(&self, id: &str, edit: &TaskEdit) -> ServiceResult<bool> {
        self.commit(|store| {
            let changed = store.edit(id, edit)?;
            Ok((changed, changed))
        })
    }

    /// Filtered, searched view in store order.
    pub fn view(&self, filter: TaskFilter, search_query: &str) -> Vec<Task> {
        self.store.view(filter, search_query)
    }

    /// Runs `mutate` and saves the snapshot when it reports a change.
    ///
    /// `mutate` returns the caller's value and whether the store changed.
    fn commit<T>(
        &self,
        mutate: impl FnOnce(&TaskStore) -> ServiceResult<(T, bool)>,
    ) -> ServiceResult<T> {
        let checkpoint = self.store.checkpoint();
        let outcome = mutate(&self.store).and_then(|(value, changed)| {
            if changed {
                self.repo.save_tasks(&self.store.snapshot())?;
            }
            Ok(value)
        });

        if let Err(err) = &outcome {
            let reason = match err {
                TaskServiceError::Validation(_) => "validation",
                TaskServiceError::Repo(_) => "repo",
            };
            warn!(
                "event=task_rollback module=service status=ok reason={reason} restored={}",
                checkpoint.len()
            );
            self.store.restore(checkpoint);
        }
        outcome
    }
}
