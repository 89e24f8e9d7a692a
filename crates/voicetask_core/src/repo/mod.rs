//! Repository layer for the task snapshot.
//!
//! # Responsibility
//! - Define the storage contract the service persists through.
//! - Isolate SQLite query details from store and service code.
//!
//! # Invariants
//! - Writes validate every task before touching SQL.
//! - Reads return semantic `InvalidData` errors for corrupt rows.

pub mod task_repo;
