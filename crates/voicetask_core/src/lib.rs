//! Core domain logic for VoiceTask.
//! This crate is the single source of truth for transcript parsing and task
//! store invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod parse;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{new_task_id, Task, TaskEdit, TaskId, TaskValidationError};
pub use parse::classify::is_likely_task;
pub use parse::due_date::{detect_date_cue, resolve_due_date, DateCue};
pub use parse::normalize::normalize_phrase;
pub use parse::segment::{segment_optional, segment_transcript};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use search::filter::{ParseTaskFilterError, TaskFilter, TaskQuery};
pub use service::task_service::{NewTaskRequest, ServiceResult, TaskService, TaskServiceError};
pub use store::task_store::{StoreCheckpoint, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
