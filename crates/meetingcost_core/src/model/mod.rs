//! Domain model for meeting cost tracking.
//!
//! # Responsibility
//! - Define participant and meeting data structures used by core logic.
//!
//! # Invariants
//! - Participant hourly rates are always derived, never hand-edited.
//! - Inactive participants are soft-excluded, not removed.
//! - Meetings are immutable snapshots; a change produces a new meeting.

pub mod meeting;
pub mod participant;
