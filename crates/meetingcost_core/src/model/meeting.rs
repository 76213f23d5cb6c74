//! Meeting record model.
//!
//! # Responsibility
//! - Define the immutable snapshot produced when a meeting is finalized.
//!
//! # Invariants
//! - A `Meeting` is never mutated after construction; fields are read-only.
//! - `cost_per_minute == cost_per_second * 60`.
//! - `in_person_cost`, `commute_minutes_per_person` and
//!   `in_person_extras_per_person` are either all present or all absent.
//! - `total_cost == meeting_cost + in_person_cost` when overhead is present,
//!   else `total_cost == meeting_cost`.

use crate::calc::aggregate::SECONDS_PER_MINUTE;
use crate::model::participant::Participant;
use serde::{Deserialize, Serialize};

/// Meeting identifier, formatted as `mtg_<integer>`.
pub type MeetingId = String;

/// Where the meeting took place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingFormat {
    #[default]
    Remote,
    InPerson,
}

/// Lifecycle state of a built meeting record.
///
/// Live meetings belong to the timer layer; core only builds finished ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    #[default]
    Completed,
}

/// Commute and extras overhead applied to an in-person meeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InPersonOverhead {
    pub cost: f64,
    pub commute_minutes_per_person: f64,
    pub extras_per_person: f64,
}

/// Remote cost figures derived from the active participant set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeetingCosts {
    pub cost_per_second: f64,
    pub average_rate: f64,
    pub meeting_cost: f64,
}

/// Finalized meeting snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meeting {
    id: MeetingId,
    timestamp: i64,
    duration: f64,
    participants: Vec<Participant>,
    cost_per_second: f64,
    cost_per_minute: f64,
    average_rate: f64,
    meeting_cost: f64,
    format: MeetingFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    in_person_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commute_minutes_per_person: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    in_person_extras_per_person: Option<f64>,
    total_cost: f64,
    status: MeetingStatus,
    sector_type: String,
    meeting_description: String,
}

/// Identity and descriptive fields of a meeting.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeetingHeader {
    pub id: MeetingId,
    pub timestamp: i64,
    pub duration: f64,
    pub format: MeetingFormat,
    pub sector_type: String,
    pub meeting_description: String,
}

impl Meeting {
    /// Assembles a completed meeting and derives the dependent totals.
    ///
    /// Callers are expected to have validated `costs` against `participants`;
    /// see `service::meeting_service::build_meeting`.
    pub(crate) fn assemble(
        header: MeetingHeader,
        participants: Vec<Participant>,
        costs: MeetingCosts,
        overhead: Option<InPersonOverhead>,
    ) -> Self {
        let total_cost = match overhead {
            Some(overhead) => costs.meeting_cost + overhead.cost,
            None => costs.meeting_cost,
        };

        Self {
            id: header.id,
            timestamp: header.timestamp,
            duration: header.duration,
            participants,
            cost_per_second: costs.cost_per_second,
            cost_per_minute: costs.cost_per_second * SECONDS_PER_MINUTE,
            average_rate: costs.average_rate,
            meeting_cost: costs.meeting_cost,
            format: header.format,
            in_person_cost: overhead.map(|value| value.cost),
            commute_minutes_per_person: overhead.map(|value| value.commute_minutes_per_person),
            in_person_extras_per_person: overhead.map(|value| value.extras_per_person),
            total_cost,
            status: MeetingStatus::Completed,
            sector_type: header.sector_type,
            meeting_description: header.meeting_description,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Meeting start in epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Elapsed seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Participant snapshot in insertion order, inactive ones included.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn cost_per_second(&self) -> f64 {
        self.cost_per_second
    }

    pub fn cost_per_minute(&self) -> f64 {
        self.cost_per_minute
    }

    pub fn average_rate(&self) -> f64 {
        self.average_rate
    }

    /// Remote portion of the cost.
    pub fn meeting_cost(&self) -> f64 {
        self.meeting_cost
    }

    pub fn format(&self) -> MeetingFormat {
        self.format
    }

    pub fn in_person_cost(&self) -> Option<f64> {
        self.in_person_cost
    }

    pub fn commute_minutes_per_person(&self) -> Option<f64> {
        self.commute_minutes_per_person
    }

    pub fn in_person_extras_per_person(&self) -> Option<f64> {
        self.in_person_extras_per_person
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn status(&self) -> MeetingStatus {
        self.status
    }

    pub fn sector_type(&self) -> &str {
        &self.sector_type
    }

    pub fn meeting_description(&self) -> &str {
        &self.meeting_description
    }
}

#[cfg(test)]
mod tests {
    use super::{InPersonOverhead, Meeting, MeetingCosts, MeetingFormat, MeetingHeader};
    use crate::calc::aggregate::SECONDS_PER_MINUTE;

    fn header() -> MeetingHeader {
        MeetingHeader {
            id: "mtg_1".to_string(),
            timestamp: 1_700_000_000_000,
            duration: 600.0,
            format: MeetingFormat::InPerson,
            sector_type: "public".to_string(),
            meeting_description: String::new(),
        }
    }

    fn costs() -> MeetingCosts {
        MeetingCosts {
            cost_per_second: 0.064_744,
            average_rate: 46.6,
            meeting_cost: 38.85,
        }
    }

    #[test]
    fn cost_per_minute_derives_from_cost_per_second() {
        let meeting = Meeting::assemble(header(), Vec::new(), costs(), None);
        assert_eq!(
            meeting.cost_per_minute(),
            meeting.cost_per_second() * SECONDS_PER_MINUTE
        );
        assert_eq!(meeting.total_cost(), meeting.meeting_cost());
    }

    #[test]
    fn overhead_fields_travel_together() {
        let overhead = InPersonOverhead {
            cost: 12.5,
            commute_minutes_per_person: 20.0,
            extras_per_person: 5.0,
        };
        let meeting = Meeting::assemble(header(), Vec::new(), costs(), Some(overhead));
        assert_eq!(meeting.in_person_cost(), Some(12.5));
        assert_eq!(meeting.commute_minutes_per_person(), Some(20.0));
        assert_eq!(meeting.in_person_extras_per_person(), Some(5.0));
        assert_eq!(meeting.total_cost(), 38.85 + 12.5);
    }
}
