//! Task view queries.
//!
//! # Responsibility
//! - Compose the completion filter with case-insensitive text search.
//! - Keep view matching rules inside core so every front end agrees.

pub mod filter;
