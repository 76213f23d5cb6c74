//! Cost calculation primitives.
//!
//! # Responsibility
//! - Normalize participant rates and aggregate them over active participants.
//! - Compute validated remote cost and in-person overhead.
//!
//! # Invariants
//! - Every aggregate ignores inactive participants.
//! - Functions are pure; only validation failures emit log lines.

pub mod aggregate;
pub mod in_person;
pub mod meeting_cost;
pub mod rates;
