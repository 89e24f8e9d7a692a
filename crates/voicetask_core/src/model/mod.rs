//! Domain model for captured tasks.
//!
//! # Responsibility
//! - Define canonical data structures used by store, repository and service.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard remove; there is no tombstone state.

pub mod task;
