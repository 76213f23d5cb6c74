//! Core domain logic for meeting cost tracking.
//! This crate is the single source of truth for cost invariants.

pub mod calc;
pub mod comparison;
pub mod format;
pub mod logging;
pub mod model;
pub mod service;
pub mod text;

pub use calc::aggregate::{
    active_count, average_rate, cost_per_minute, cost_per_second, total_active_rate,
};
pub use calc::in_person::{compute_in_person_cost, in_person_breakdown, InPersonBreakdown};
pub use calc::meeting_cost::{compute_cost, CostCalculation, CostError};
pub use calc::rates::{normalize_hourly_rate, WORKING_HOURS_PER_YEAR};
pub use comparison::generator::{
    generate_comparison, generate_comparison_list, DEFAULT_COMPARISON_COUNT,
};
pub use format::display::{
    format_currency, format_duration, format_elapsed_time, format_hourly_rate, DurationBreakdown,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::meeting::{Meeting, MeetingFormat, MeetingId, MeetingStatus};
pub use model::participant::{
    EmploymentTerms, Participant, ParticipantId, ParticipantValidationError,
};
pub use service::meeting_service::{
    build_meeting, create_participants, BuildMeetingRequest, MeetingBuildError, QuickMode,
    DEFAULT_SECTOR_TYPE,
};
pub use text::sanitize::{sanitize, sanitize_default, sanitize_value, DEFAULT_MAX_LENGTH};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
