//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parsing, store mutations and persistence into use-cases.
//! - Keep FFI/CLI layers decoupled from storage details.

pub mod task_service;
