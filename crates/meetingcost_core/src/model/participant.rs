//! Participant domain model.
//!
//! # Responsibility
//! - Define the canonical billing record for one meeting attendee.
//! - Keep the derived hourly rate in lockstep with employment terms.
//!
//! # Invariants
//! - `effective_hourly_rate` always equals the normalized rate of `terms`.
//!   It is recomputed on every terms change and never edited directly.
//! - Salary and hourly rate are mutually exclusive (`EmploymentTerms`).
//! - `is_active == false` is a soft exclusion: the participant stays in the
//!   list but contributes to no cost aggregate.

use crate::calc::rates::normalize_hourly_rate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque caller-supplied participant identifier.
pub type ParticipantId = String;

/// Employment terms that determine how a participant is billed.
///
/// Serialized with an `employment_type` tag so the wire shape stays flat:
/// `{"employment_type": "fulltime", "annual_salary": 90000.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum EmploymentTerms {
    /// Salaried employee billed from annual salary.
    Fulltime { annual_salary: f64 },
    /// Contractor billed at a fixed hourly rate.
    Contractor { hourly_rate: f64 },
}

/// Validation error for participant rate terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticipantValidationError {
    /// Annual salary is negative, NaN or infinite.
    InvalidAnnualSalary(f64),
    /// Hourly rate is negative, NaN or infinite.
    InvalidHourlyRate(f64),
}

impl Display for ParticipantValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAnnualSalary(value) => write!(
                f,
                "invalid participant: annual_salary must be a non-negative finite number, got {value}"
            ),
            Self::InvalidHourlyRate(value) => write!(
                f,
                "invalid participant: hourly_rate must be a non-negative finite number, got {value}"
            ),
        }
    }
}

impl Error for ParticipantValidationError {}

/// One meeting attendee with normalized billing rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParticipantRecord")]
pub struct Participant {
    /// Caller-supplied identifier, unique within one participant list.
    pub id: ParticipantId,
    #[serde(flatten)]
    terms: EmploymentTerms,
    effective_hourly_rate: f64,
    /// Only active participants contribute to cost aggregates.
    pub is_active: bool,
}

impl Participant {
    /// Creates an active participant and derives its hourly rate.
    ///
    /// # Errors
    /// - Returns an error when the salary/rate is negative or not finite.
    pub fn new(
        id: impl Into<ParticipantId>,
        terms: EmploymentTerms,
    ) -> Result<Self, ParticipantValidationError> {
        let effective_hourly_rate = normalize_hourly_rate(&terms)?;
        Ok(Self {
            id: id.into(),
            terms,
            effective_hourly_rate,
            is_active: true,
        })
    }

    /// Shorthand for a salaried participant.
    pub fn fulltime(
        id: impl Into<ParticipantId>,
        annual_salary: f64,
    ) -> Result<Self, ParticipantValidationError> {
        Self::new(id, EmploymentTerms::Fulltime { annual_salary })
    }

    /// Shorthand for an hourly contractor.
    pub fn contractor(
        id: impl Into<ParticipantId>,
        hourly_rate: f64,
    ) -> Result<Self, ParticipantValidationError> {
        Self::new(id, EmploymentTerms::Contractor { hourly_rate })
    }

    pub fn terms(&self) -> EmploymentTerms {
        self.terms
    }

    /// Normalized per-hour cost regardless of employment type.
    pub fn effective_hourly_rate(&self) -> f64 {
        self.effective_hourly_rate
    }

    /// Replaces employment terms and recomputes the hourly rate.
    ///
    /// On error the participant is left unchanged.
    pub fn set_terms(&mut self, terms: EmploymentTerms) -> Result<(), ParticipantValidationError> {
        self.effective_hourly_rate = normalize_hourly_rate(&terms)?;
        self.terms = terms;
        Ok(())
    }

    /// Excludes this participant from cost aggregates without removing it.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Re-includes this participant in cost aggregates.
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}

/// Wire shape accepted on deserialization.
///
/// Any incoming `effective_hourly_rate` is ignored and recomputed.
#[derive(Deserialize)]
struct ParticipantRecord {
    id: ParticipantId,
    #[serde(flatten)]
    terms: EmploymentTerms,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TryFrom<ParticipantRecord> for Participant {
    type Error = ParticipantValidationError;

    fn try_from(value: ParticipantRecord) -> Result<Self, Self::Error> {
        let mut participant = Participant::new(value.id, value.terms)?;
        participant.is_active = value.is_active;
        Ok(participant)
    }
}
