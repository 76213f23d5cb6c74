//! Active-participant rate aggregation.
//!
//! # Invariants
//! - Only participants with `is_active == true` are counted.
//! - An empty active set totals `0.0`; its average is `None`, not zero.

use crate::model::participant::Participant;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

fn active(participants: &[Participant]) -> impl Iterator<Item = &Participant> {
    participants.iter().filter(|participant| participant.is_active)
}

/// Number of active participants.
pub fn active_count(participants: &[Participant]) -> usize {
    active(participants).count()
}

/// Sum of effective hourly rates over active participants.
pub fn total_active_rate(participants: &[Participant]) -> f64 {
    active(participants)
        .map(Participant::effective_hourly_rate)
        .sum()
}

/// Aggregate cost of one second of meeting time.
pub fn cost_per_second(participants: &[Participant]) -> f64 {
    total_active_rate(participants) / SECONDS_PER_HOUR
}

/// Aggregate cost of one minute; always `cost_per_second * 60`.
pub fn cost_per_minute(participants: &[Participant]) -> f64 {
    cost_per_second(participants) * SECONDS_PER_MINUTE
}

/// Mean effective hourly rate over active participants.
///
/// Returns `None` when nobody is active.
pub fn average_rate(participants: &[Participant]) -> Option<f64> {
    let count = active_count(participants);
    if count == 0 {
        return None;
    }
    Some(total_active_rate(participants) / count as f64)
}

#[cfg(test)]
mod tests {
    use super::{active_count, average_rate, cost_per_minute, cost_per_second, total_active_rate};
    use crate::model::participant::Participant;

    #[test]
    fn empty_list_totals_zero_and_has_no_average() {
        assert_eq!(total_active_rate(&[]), 0.0);
        assert_eq!(cost_per_second(&[]), 0.0);
        assert_eq!(average_rate(&[]), None);
    }

    #[test]
    fn inactive_participants_are_skipped() {
        let active = Participant::contractor("a", 100.0).unwrap();
        let mut inactive = Participant::contractor("b", 900.0).unwrap();
        inactive.deactivate();
        let participants = vec![active, inactive];

        assert_eq!(active_count(&participants), 1);
        assert_eq!(total_active_rate(&participants), 100.0);
        assert_eq!(average_rate(&participants), Some(100.0));
    }

    #[test]
    fn cost_per_minute_is_sixty_seconds() {
        let participants = vec![
            Participant::fulltime("a", 90_000.0).unwrap(),
            Participant::contractor("b", 60.0).unwrap(),
        ];
        assert_eq!(
            cost_per_minute(&participants),
            cost_per_second(&participants) * 60.0
        );
    }
}
