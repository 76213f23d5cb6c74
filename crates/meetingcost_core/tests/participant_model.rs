use meetingcost_core::{
    EmploymentTerms, Participant, ParticipantValidationError, WORKING_HOURS_PER_YEAR,
};

#[test]
fn fulltime_rate_is_salary_over_working_hours() {
    let participant = Participant::fulltime("p1", 90_000.0).unwrap();
    assert!((participant.effective_hourly_rate() - 90_000.0 / WORKING_HOURS_PER_YEAR).abs() < 1e-9);
    assert!((participant.effective_hourly_rate() - 43.269).abs() < 0.001);
    assert!(participant.is_active);
}

#[test]
fn contractor_rate_is_hourly_rate_exactly() {
    let participant = Participant::contractor("p1", 60.0).unwrap();
    assert_eq!(participant.effective_hourly_rate(), 60.0);
    assert_eq!(
        participant.terms(),
        EmploymentTerms::Contractor { hourly_rate: 60.0 }
    );
}

#[test]
fn negative_terms_are_invalid_participants() {
    assert_eq!(
        Participant::fulltime("p1", -10.0).unwrap_err(),
        ParticipantValidationError::InvalidAnnualSalary(-10.0)
    );
    assert_eq!(
        Participant::contractor("p1", -0.5).unwrap_err(),
        ParticipantValidationError::InvalidHourlyRate(-0.5)
    );
}

#[test]
fn serialization_uses_flat_tagged_wire_fields() {
    let participant = Participant::fulltime("p1", 104_000.0).unwrap();
    let json = serde_json::to_value(&participant).unwrap();

    assert_eq!(json["id"], "p1");
    assert_eq!(json["employment_type"], "fulltime");
    assert_eq!(json["annual_salary"], 104_000.0);
    assert_eq!(json["effective_hourly_rate"], 50.0);
    assert_eq!(json["is_active"], true);
    assert!(json.get("hourly_rate").is_none());

    let decoded: Participant = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, participant);
}

#[test]
fn deserialize_recomputes_rate_and_defaults_active() {
    let value = serde_json::json!({
        "id": "c1",
        "employment_type": "contractor",
        "hourly_rate": 75.0,
        "effective_hourly_rate": 9999.0
    });

    let participant: Participant = serde_json::from_value(value).unwrap();
    assert_eq!(participant.effective_hourly_rate(), 75.0);
    assert!(participant.is_active);
}

#[test]
fn deserialize_rejects_missing_or_negative_terms() {
    let missing = serde_json::json!({
        "id": "p1",
        "employment_type": "fulltime",
        "hourly_rate": 50.0
    });
    assert!(serde_json::from_value::<Participant>(missing).is_err());

    let negative = serde_json::json!({
        "id": "p1",
        "employment_type": "fulltime",
        "annual_salary": -1.0
    });
    let err = serde_json::from_value::<Participant>(negative).unwrap_err();
    assert!(
        err.to_string().contains("annual_salary"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_keeps_inactive_flag() {
    let value = serde_json::json!({
        "id": "p1",
        "employment_type": "contractor",
        "hourly_rate": 40.0,
        "is_active": false
    });
    let participant: Participant = serde_json::from_value(value).unwrap();
    assert!(!participant.is_active);
}
