//! Transcript parsing pipeline.
//!
//! # Responsibility
//! - Turn one raw transcript into ordered task phrases.
//! - Resolve relative due-date keywords against a caller-supplied date.
//!
//! # Invariants
//! - Every function here is pure, synchronous and total over `&str`.
//! - Nothing in this module logs or touches shared state.

pub mod classify;
pub mod due_date;
pub mod lexicon;
pub mod normalize;
pub mod segment;
