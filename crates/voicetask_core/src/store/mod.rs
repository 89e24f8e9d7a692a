//! Owned task collection.
//!
//! # Responsibility
//! - Hold the single in-process copy of the task list.
//! - Enforce ordering and validation on every mutation.
//!
//! # See also
//! - `search::filter` for view matching rules.

pub mod task_store;
