//! Meeting assembly use-cases.
//!
//! # Responsibility
//! - Turn a finalized participant list and elapsed time into a `Meeting`.
//! - Create uniform participant lists for quick mode.
//!
//! # Invariants
//! - Cost validation failures abort the build; no zero-cost placeholder
//!   meeting is ever returned.
//! - In-person overhead is computed only for `InPerson` meetings with
//!   `apply_in_person_tax == true`; otherwise the overhead fields are absent.
//! - Generated ids are `mtg_<integer>` and strictly increase within a process.
//! - Free-text description is sanitized before it reaches the record.

use crate::calc::aggregate::{active_count, average_rate, cost_per_second};
use crate::calc::in_person::compute_in_person_cost;
use crate::calc::meeting_cost::{compute_cost, CostError};
use crate::model::meeting::{
    InPersonOverhead, Meeting, MeetingCosts, MeetingFormat, MeetingHeader, MeetingId,
};
use crate::model::participant::{EmploymentTerms, Participant, ParticipantValidationError};
use crate::text::sanitize::{sanitize, DEFAULT_MAX_LENGTH};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Sector tag applied when the caller does not provide one.
pub const DEFAULT_SECTOR_TYPE: &str = "private";
/// Character cap for sanitized meeting descriptions.
pub const DESCRIPTION_MAX_LENGTH: usize = DEFAULT_MAX_LENGTH;

const MEETING_ID_PREFIX: &str = "mtg_";

static LAST_MEETING_SEQ: AtomicI64 = AtomicI64::new(0);

/// Service error for meeting assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeetingBuildError {
    /// Participant list or duration failed cost validation.
    Cost(CostError),
}

impl Display for MeetingBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cost(err) => write!(f, "cannot build meeting: {err}"),
        }
    }
}

impl Error for MeetingBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cost(err) => Some(err),
        }
    }
}

impl From<CostError> for MeetingBuildError {
    fn from(value: CostError) -> Self {
        Self::Cost(value)
    }
}

/// Request model for building one meeting record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildMeetingRequest {
    /// Finalized participant snapshot, inactive entries included.
    pub participants: Vec<Participant>,
    /// Elapsed seconds; must be `>= 0`.
    pub duration_seconds: f64,
    /// Meeting start in epoch milliseconds. Defaults to now.
    pub timestamp_ms: Option<i64>,
    /// Defaults to `DEFAULT_SECTOR_TYPE`.
    pub sector_type: Option<String>,
    /// Raw description; sanitized before storage. Defaults to empty.
    pub description: Option<String>,
    /// Caller-provided id used verbatim instead of a generated one.
    pub id_override: Option<MeetingId>,
    pub format: MeetingFormat,
    /// Adds commute/extras overhead when `format == InPerson`.
    pub apply_in_person_tax: bool,
    /// Commute minutes per person. Defaults to 0.
    pub commute_minutes: Option<f64>,
    /// Extra spend per person (food, travel). Defaults to 0.
    pub extras_per_person: Option<f64>,
}

impl BuildMeetingRequest {
    /// Creates a remote-meeting request with all optional fields defaulted.
    pub fn new(participants: Vec<Participant>, duration_seconds: f64) -> Self {
        Self {
            participants,
            duration_seconds,
            ..Self::default()
        }
    }
}

/// Builds a completed meeting record.
///
/// # Errors
/// - `MeetingBuildError::Cost` when the participant list is empty, the
///   duration is negative, or nobody is active.
pub fn build_meeting(request: BuildMeetingRequest) -> Result<Meeting, MeetingBuildError> {
    let BuildMeetingRequest {
        participants,
        duration_seconds,
        timestamp_ms,
        sector_type,
        description,
        id_override,
        format,
        apply_in_person_tax,
        commute_minutes,
        extras_per_person,
    } = request;

    let meeting_cost = match compute_cost(&participants, duration_seconds).into_result() {
        Ok(cost) => cost,
        Err(err) => {
            warn!(
                "event=meeting_build module=service status=error code={}",
                err.code()
            );
            return Err(err.into());
        }
    };

    let costs = MeetingCosts {
        cost_per_second: cost_per_second(&participants),
        // compute_cost guarantees at least one active participant.
        average_rate: average_rate(&participants).unwrap_or(0.0),
        meeting_cost,
    };

    let overhead = if format == MeetingFormat::InPerson && apply_in_person_tax {
        let commute_minutes = commute_minutes.unwrap_or(0.0);
        let extras_per_person = extras_per_person.unwrap_or(0.0);
        Some(InPersonOverhead {
            cost: compute_in_person_cost(&participants, commute_minutes, extras_per_person),
            commute_minutes_per_person: commute_minutes,
            extras_per_person,
        })
    } else {
        None
    };

    let timestamp = timestamp_ms.unwrap_or_else(now_epoch_ms);
    let header = MeetingHeader {
        id: id_override.unwrap_or_else(|| next_meeting_id(now_epoch_ms())),
        timestamp,
        duration: duration_seconds,
        format,
        sector_type: sector_type.unwrap_or_else(|| DEFAULT_SECTOR_TYPE.to_string()),
        meeting_description: description
            .map(|value| sanitize(&value, DESCRIPTION_MAX_LENGTH))
            .unwrap_or_default(),
    };

    let active = active_count(&participants);
    let meeting = Meeting::assemble(header, participants, costs, overhead);
    info!(
        "event=meeting_build module=service status=ok id={} participants={} active={} format={:?} in_person={}",
        meeting.id(),
        meeting.participants().len(),
        active,
        meeting.format(),
        meeting.in_person_cost().is_some()
    );
    Ok(meeting)
}

/// Generates the next `mtg_<integer>` id.
///
/// The integer is the current epoch milliseconds, bumped past the previous
/// id when two meetings are built within the same millisecond.
pub fn next_meeting_id(now_ms: i64) -> MeetingId {
    let previous = LAST_MEETING_SEQ
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now_ms.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    format!("{MEETING_ID_PREFIX}{}", now_ms.max(previous + 1))
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

/// How quick mode interprets its uniform value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickMode {
    /// Value is an annual salary; creates fulltime participants.
    Salary,
    /// Value is an hourly rate; creates contractors.
    Hourly,
}

/// Creates `count` identical active participants with distinct ids.
///
/// # Errors
/// - Returns the rate validation error when `value` is negative or not finite.
pub fn create_participants(
    count: usize,
    mode: QuickMode,
    value: f64,
) -> Result<Vec<Participant>, ParticipantValidationError> {
    let terms = match mode {
        QuickMode::Salary => EmploymentTerms::Fulltime {
            annual_salary: value,
        },
        QuickMode::Hourly => EmploymentTerms::Contractor { hourly_rate: value },
    };

    (0..count)
        .map(|_| Participant::new(Uuid::new_v4().to_string(), terms))
        .collect()
}
