//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Translate core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.
//! - Every mutating call persists before it returns.

use chrono::NaiveDate;
use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};
use voicetask_core::db::open_db;
use voicetask_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    resolve_due_date as resolve_due_date_inner, segment_optional, CoreConfig, NewTaskRequest,
    SqliteTaskRepository, Task, TaskFilter, TaskService,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
static ENTRY_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
// Each call loads, mutates and rewrites the whole snapshot; calls must not
// interleave within one process.
static ENTRY_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row shape returned to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD` when set.
    pub due_date: Option<String>,
    pub completed: bool,
}

/// List response envelope for task views and capture results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub items: Vec<TaskItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl TaskListResponse {
    fn success(items: Vec<TaskItem>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            items,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Generic action response envelope for single-task commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    /// Target or created task ID.
    pub task_id: Option<String>,
    /// `false` when the target id did not exist (no-op).
    pub changed: bool,
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: String, changed: bool) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            changed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            changed: false,
            message: message.into(),
        }
    }
}

/// Splits a transcript into task phrases without storing anything.
///
/// # FFI contract
/// - A null transcript behaves like an empty one.
#[flutter_rust_bridge::frb(sync)]
pub fn segment_transcript(transcript: Option<String>) -> Vec<String> {
    segment_optional(transcript.as_deref())
}

/// Resolves a relative due date for `text`.
///
/// Returns `None` when no keyword matches or `reference_date` is not
/// `YYYY-MM-DD`.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_due_date(text: String, reference_date: String) -> Option<String> {
    let reference = parse_date(&reference_date)?;
    resolve_due_date_inner(&text, reference).map(format_date)
}

/// Captures a finished transcript as tasks and persists them.
///
/// `reference_date` is the caller's local "today" as `YYYY-MM-DD`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_capture(transcript: Option<String>, reference_date: String) -> TaskListResponse {
    let Some(today) = parse_date(&reference_date) else {
        return TaskListResponse::failure(format!(
            "entry_capture failed: invalid reference date `{reference_date}`"
        ));
    };
    let transcript = transcript.unwrap_or_default();

    match with_task_service(|service| {
        service
            .capture_transcript(&transcript, today)
            .map_err(|err| err.to_string())
    }) {
        Ok(created) => {
            let message = if created.is_empty() {
                "No tasks detected.".to_string()
            } else {
                format!("Captured {} task(s).", created.len())
            };
            TaskListResponse::success(created.into_iter().map(to_task_item).collect(), message)
        }
        Err(err) => TaskListResponse::failure(format!("entry_capture failed: {err}")),
    }
}

/// Creates a task from manual entry.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(
    title: String,
    description: Option<String>,
    due_date: Option<String>,
) -> TaskActionResponse {
    let due_date = match due_date.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => match parse_date(raw) {
            Some(date) => Some(date),
            None => {
                return TaskActionResponse::failure(format!(
                    "task_create failed: invalid due date `{raw}`"
                ))
            }
        },
        None => None,
    };
    let request = NewTaskRequest {
        title,
        description: description.filter(|value| !value.trim().is_empty()),
        due_date,
    };

    match with_task_service(|service| service.add_task(request).map_err(|err| err.to_string())) {
        Ok(task_id) => TaskActionResponse::success("Task created.", task_id, true),
        Err(err) => TaskActionResponse::failure(format!("task_create failed: {err}")),
    }
}

/// Flips completion of one task; unknown ids are a successful no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(task_id: String) -> TaskActionResponse {
    match with_task_service(|service| {
        service
            .toggle_completion(&task_id)
            .map_err(|err| err.to_string())
    }) {
        Ok(changed) => TaskActionResponse::success("Task toggled.", task_id, changed),
        Err(err) => TaskActionResponse::failure(format!("task_toggle failed: {err}")),
    }
}

/// Deletes one task; unknown ids are a successful no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> TaskActionResponse {
    match with_task_service(|service| service.delete_task(&task_id).map_err(|err| err.to_string()))
    {
        Ok(changed) => TaskActionResponse::success("Task deleted.", task_id, changed),
        Err(err) => TaskActionResponse::failure(format!("task_delete failed: {err}")),
    }
}

/// Lists tasks in store order for a filter label and search text.
///
/// `filter` accepts `all|completed|incomplete`; `None` means `all`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list(filter: Option<String>, query: Option<String>) -> TaskListResponse {
    let filter = match filter.as_deref().unwrap_or("all").parse::<TaskFilter>() {
        Ok(filter) => filter,
        Err(err) => return TaskListResponse::failure(format!("task_list failed: {err}")),
    };
    let query = query.unwrap_or_default().trim().to_string();

    match with_task_service(|service| Ok(service.view(filter, &query))) {
        Ok(tasks) => {
            let message = if tasks.is_empty() {
                "No tasks.".to_string()
            } else {
                format!("Found {} task(s).", tasks.len())
            };
            TaskListResponse::success(tasks.into_iter().map(to_task_item).collect(), message)
        }
        Err(err) => TaskListResponse::failure(format!("task_list failed: {err}")),
    }
}

fn resolve_entry_db_path() -> PathBuf {
    ENTRY_DB_PATH
        .get_or_init(|| CoreConfig::from_env().db_path)
        .clone()
}

fn with_task_service<T>(
    f: impl FnOnce(&TaskService<SqliteTaskRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let _guard = ENTRY_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let db_path = resolve_entry_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("task DB open failed: {err}"))?;
    let service = TaskService::load(SqliteTaskRepository::new(&conn)).map_err(|err| {
        warn!("event=tasks_load module=ffi status=error error={err}");
        format!("task store load failed: {err}")
    })?;
    f(&service)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        id: task.id,
        title: task.title,
        description: task.description,
        due_date: task.due_date.map(format_date),
        completed: task.completed,
    }
}
