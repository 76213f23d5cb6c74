//! In-person overhead (commute time + per-person extras).
//!
//! # Invariants
//! - No active participants yields `0.0`; this is a valid state, not an error.
//! - Commute and extras contributions are additive and computed independently.

use crate::calc::aggregate::{active_count, total_active_rate};
use crate::model::participant::Participant;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Itemized in-person overhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InPersonBreakdown {
    /// `total_active_rate * commute_minutes / 60`.
    pub commute_cost: f64,
    /// `active_count * extras_per_person`.
    pub extras_cost: f64,
}

impl InPersonBreakdown {
    pub fn total(&self) -> f64 {
        self.commute_cost + self.extras_cost
    }
}

/// Computes commute and extras contributions for active participants.
pub fn in_person_breakdown(
    participants: &[Participant],
    commute_minutes: f64,
    extras_per_person: f64,
) -> InPersonBreakdown {
    let count = active_count(participants);
    if count == 0 {
        return InPersonBreakdown {
            commute_cost: 0.0,
            extras_cost: 0.0,
        };
    }

    InPersonBreakdown {
        commute_cost: total_active_rate(participants) * (commute_minutes / MINUTES_PER_HOUR),
        extras_cost: count as f64 * extras_per_person,
    }
}

/// Total in-person overhead for active participants.
pub fn compute_in_person_cost(
    participants: &[Participant],
    commute_minutes: f64,
    extras_per_person: f64,
) -> f64 {
    in_person_breakdown(participants, commute_minutes, extras_per_person).total()
}

#[cfg(test)]
mod tests {
    use super::{compute_in_person_cost, in_person_breakdown};
    use crate::model::participant::Participant;

    #[test]
    fn empty_set_is_zero() {
        assert_eq!(compute_in_person_cost(&[], 30.0, 15.0), 0.0);
    }

    #[test]
    fn breakdown_separates_commute_and_extras() {
        let participants = vec![
            Participant::contractor("a", 60.0).unwrap(),
            Participant::contractor("b", 40.0).unwrap(),
        ];
        let breakdown = in_person_breakdown(&participants, 30.0, 12.5);
        assert_eq!(breakdown.commute_cost, 50.0);
        assert_eq!(breakdown.extras_cost, 25.0);
        assert_eq!(breakdown.total(), 75.0);
    }
}
