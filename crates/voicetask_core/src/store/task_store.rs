//! In-memory task collection with ordered views.
//!
//! # Responsibility
//! - Own the task collection and the process-scoped view state.
//! - Re-establish due-date order after every mutation.
//! - Derive filtered/searched views without touching stored order.
//!
//! # Invariants
//! - Dated tasks precede undated ones; dates ascend.
//! - Ties (same date, or both undated) keep insertion order.
//! - Mutations are serialized behind a write lock; a reader never sees a
//!   half-applied mutation.
//! - Toggle/delete/edit on an unknown id are no-ops, not errors.

use crate::model::task::{Task, TaskEdit, TaskId, TaskValidationError};
use crate::search::filter::{TaskFilter, TaskQuery};
use log::{debug, info};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Task plus its insertion sequence, used as the sort tie-break.
#[derive(Debug, Clone)]
struct StoredTask {
    seq: u64,
    task: Task,
}

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<StoredTask>,
    next_seq: u64,
    view: TaskQuery,
}

impl StoreState {
    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.task.id == id)
    }

    fn insert(&mut self, task: Task) -> Result<TaskId, TaskValidationError> {
        task.validate()?;
        if self.position(&task.id).is_some() {
            return Err(TaskValidationError::DuplicateId(task.id));
        }

        let id = task.id.clone();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(StoredTask { seq, task });
        self.sort();
        Ok(id)
    }

    /// Stable sort on (undated last, due date, insertion sequence).
    fn sort(&mut self) {
        self.entries.sort_by(|left, right| {
            let left_key = (left.task.due_date.is_none(), left.task.due_date, left.seq);
            let right_key = (right.task.due_date.is_none(), right.task.due_date, right.seq);
            left_key.cmp(&right_key)
        });
    }
}

/// Saved task collection, restored with [`TaskStore::restore`].
///
/// Insertion sequence numbers are kept, so later ties sort as before.
#[derive(Debug, Clone)]
pub struct StoreCheckpoint {
    entries: Vec<StoredTask>,
    next_seq: u64,
}

impl StoreCheckpoint {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Thread-safe owner of the task collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    state: RwLock<StoreState>,
}

impl TaskStore {
    /// Creates an empty store with the `all` filter and no search text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a persisted ordered list.
    ///
    /// Persisted order is treated as insertion order.
    ///
    /// # Errors
    /// - Any validation failure from [`TaskStore::add`]; no store is built.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskValidationError> {
        let mut state = StoreState::default();
        for task in tasks {
            state.insert(task)?;
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Inserts one task and re-sorts the collection.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title normalizes to empty.
    /// - `DuplicateId` when the id is already stored.
    ///
    /// The store is unchanged on error.
    pub fn add(&self, task: Task) -> Result<TaskId, TaskValidationError> {
        let has_due_date = task.due_date.is_some();
        let mut state = self.write();
        match state.insert(task) {
            Ok(id) => {
                info!(
                    "event=task_add module=store status=ok has_due_date={} total={}",
                    has_due_date,
                    state.entries.len()
                );
                Ok(id)
            }
            Err(err) => {
                info!("event=task_add module=store status=rejected reason={err:?}");
                Err(err)
            }
        }
    }

    /// Flips completion for `id`.
    ///
    /// Returns `false` when no task has this id.
    pub fn toggle_completion(&self, id: &str) -> bool {
        let mut state = self.write();
        let Some(index) = state.position(id) else {
            debug!("event=task_toggle module=store status=noop");
            return false;
        };
        let task = &mut state.entries[index].task;
        task.completed = !task.completed;
        info!(
            "event=task_toggle module=store status=ok completed={}",
            task.completed
        );
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` when no task has this id.
    pub fn delete(&self, id: &str) -> bool {
        let mut state = self.write();
        let Some(index) = state.position(id) else {
            debug!("event=task_delete module=store status=noop");
            return false;
        };
        state.entries.remove(index);
        info!(
            "event=task_delete module=store status=ok total={}",
            state.entries.len()
        );
        true
    }

    /// Applies `edit` to the task with `id` and re-sorts.
    ///
    /// Returns `Ok(false)` when no task has this id.
    ///
    /// # Errors
    /// - `EmptyTitle` when the edited title normalizes to empty; the task is
    ///   left unchanged.
    pub fn edit(&self, id: &str, edit: &TaskEdit) -> Result<bool, TaskValidationError> {
        let mut state = self.write();
        let Some(index) = state.position(id) else {
            debug!("event=task_edit module=store status=noop");
            return Ok(false);
        };
        let updated = edit.apply_to(&state.entries[index].task)?;
        state.entries[index].task = updated;
        state.sort();
        info!("event=task_edit module=store status=ok");
        Ok(true)
    }

    /// Returns tasks in store order that pass `filter` and contain
    /// `search_query` (case-insensitive) in title or description.
    pub fn view(&self, filter: TaskFilter, search_query: &str) -> Vec<Task> {
        let matcher = TaskQuery::new(filter, search_query).matcher();
        self.read()
            .entries
            .iter()
            .filter(|entry| matcher.matches(&entry.task))
            .map(|entry| entry.task.clone())
            .collect()
    }

    /// Sets the filter used by [`TaskStore::current_view`].
    pub fn set_filter(&self, filter: TaskFilter) {
        self.write().view.filter = filter;
    }

    /// Sets the search text used by [`TaskStore::current_view`].
    pub fn set_search_query(&self, search_query: impl Into<String>) {
        self.write().view.text = search_query.into();
    }

    /// Returns the stored view state.
    pub fn view_state(&self) -> TaskQuery {
        self.read().view.clone()
    }

    /// Returns the view for the stored filter and search text.
    pub fn current_view(&self) -> Vec<Task> {
        let state = self.read();
        let matcher = state.view.matcher();
        state
            .entries
            .iter()
            .filter(|entry| matcher.matches(&entry.task))
            .map(|entry| entry.task.clone())
            .collect()
    }

    /// Returns the full unfiltered collection in store order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.read()
            .entries
            .iter()
            .map(|entry| entry.task.clone())
            .collect()
    }

    /// Captures the collection for a later [`TaskStore::restore`].
    pub fn checkpoint(&self) -> StoreCheckpoint {
        let state = self.read();
        StoreCheckpoint {
            entries: state.entries.clone(),
            next_seq: state.next_seq,
        }
    }

    /// Replaces the collection with `checkpoint`. View state is kept.
    pub fn restore(&self, checkpoint: StoreCheckpoint) {
        let mut state = self.write();
        state.entries = checkpoint.entries;
        state.next_seq = checkpoint.next_seq;
        info!(
            "event=task_restore module=store status=ok total={}",
            state.entries.len()
        );
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        let state = self.read();
        state
            .position(id)
            .map(|index| state.entries[index].task.clone())
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    // Every mutation finishes (re-sort included) before its guard drops, so a
    // poisoned lock still holds a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
