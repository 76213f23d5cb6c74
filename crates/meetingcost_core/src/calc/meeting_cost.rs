//! Validated remote meeting cost.
//!
//! # Responsibility
//! - Validate participant list and duration before computing cost.
//! - Report failures as data (`CostCalculation::error`), never panic.
//!
//! # Invariants
//! - Validation order is fixed: empty list, then duration, then active set.
//! - A failed calculation always carries `cost == 0.0`.
//! - Cost is linear in duration.

use crate::calc::aggregate::{active_count, cost_per_second};
use crate::model::participant::Participant;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Meeting-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostError {
    /// Participant list is empty.
    NoParticipants,
    /// Duration is negative or NaN.
    InvalidDuration(f64),
    /// Participant list is non-empty but nobody is active.
    NoActiveParticipants,
}

impl CostError {
    /// Stable machine-readable code, used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoParticipants => "no_participants",
            Self::InvalidDuration(_) => "invalid_duration",
            Self::NoActiveParticipants => "no_active_participants",
        }
    }
}

impl Display for CostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoParticipants => write!(f, "meeting has no participants"),
            Self::InvalidDuration(value) => {
                write!(f, "meeting duration must be >= 0 seconds, got {value}")
            }
            Self::NoActiveParticipants => write!(f, "meeting has no active participants"),
        }
    }
}

impl Error for CostError {}

/// Result envelope for one cost calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCalculation {
    /// Computed cost, or `0.0` when `error` is set.
    pub cost: f64,
    pub error: Option<CostError>,
}

impl CostCalculation {
    fn failed(error: CostError) -> Self {
        Self {
            cost: 0.0,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts the envelope into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<f64, CostError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.cost),
        }
    }
}

/// Validates inputs and computes `cost_per_second * duration_seconds`.
pub fn compute_cost(participants: &[Participant], duration_seconds: f64) -> CostCalculation {
    if let Err(err) = validate_cost_inputs(participants, duration_seconds) {
        warn!(
            "event=cost_compute module=calc status=error code={} participants={}",
            err.code(),
            participants.len()
        );
        return CostCalculation::failed(err);
    }

    CostCalculation {
        cost: cost_per_second(participants) * duration_seconds,
        error: None,
    }
}

fn validate_cost_inputs(
    participants: &[Participant],
    duration_seconds: f64,
) -> Result<(), CostError> {
    if participants.is_empty() {
        return Err(CostError::NoParticipants);
    }
    // NaN fails this comparison as well.
    if !(duration_seconds >= 0.0) {
        return Err(CostError::InvalidDuration(duration_seconds));
    }
    if active_count(participants) == 0 {
        return Err(CostError::NoActiveParticipants);
    }
    Ok(())
}
