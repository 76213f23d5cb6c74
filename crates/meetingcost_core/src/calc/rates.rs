//! Hourly rate normalization.
//!
//! # Invariants
//! - Fulltime rate is `annual_salary / WORKING_HOURS_PER_YEAR`.
//! - Contractor rate is `hourly_rate` unchanged.
//! - Negative or non-finite amounts are rejected, never clamped.

use crate::model::participant::{EmploymentTerms, ParticipantValidationError};

/// Standard working hours per year (40 hours x 52 weeks).
pub const WORKING_HOURS_PER_YEAR: f64 = 2080.0;

/// Derives the effective hourly rate for one set of employment terms.
///
/// # Errors
/// - `InvalidAnnualSalary` / `InvalidHourlyRate` when the amount is negative,
///   NaN or infinite.
pub fn normalize_hourly_rate(terms: &EmploymentTerms) -> Result<f64, ParticipantValidationError> {
    match *terms {
        EmploymentTerms::Fulltime { annual_salary } => {
            if !is_valid_amount(annual_salary) {
                return Err(ParticipantValidationError::InvalidAnnualSalary(
                    annual_salary,
                ));
            }
            Ok(annual_salary / WORKING_HOURS_PER_YEAR)
        }
        EmploymentTerms::Contractor { hourly_rate } => {
            if !is_valid_amount(hourly_rate) {
                return Err(ParticipantValidationError::InvalidHourlyRate(hourly_rate));
            }
            Ok(hourly_rate)
        }
    }
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
