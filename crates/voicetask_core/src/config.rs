//! Runtime configuration read from the process environment.
//!
//! # Responsibility
//! - Resolve log level, optional log directory and database path.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - Resolution never fails; unknown levels surface later from
//!   `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "VOICETASK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "VOICETASK_LOG_DIR";
pub const ENV_DB_PATH: &str = "VOICETASK_DB_PATH";

/// Database file used when `VOICETASK_DB_PATH` is unset.
pub const DEFAULT_DB_FILE_NAME: &str = "voicetask.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    pub db_path: PathBuf,
}

impl CoreConfig {
    /// Reads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            log_level: read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            db_path: read(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
        }
    }
}
