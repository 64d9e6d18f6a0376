// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for lenient parsing of wire-format reservation and maintenance records.

use frota_rent_domain::{IdentityNumber, TimestampField};

use crate::{
    MaintenanceRecord, RecordError, ReservationRecord, parse_maintenance, parse_reservation,
};

// ============================================================================
// Reservation Record Parsing Tests
// ============================================================================

#[test]
fn test_parse_reservation_with_encoded_dates() {
    let payload = r#"{
        "id": "res-001",
        "status": "CONFIRMED",
        "start_date": [2024, 3, 15, 10, 30],
        "end_date": [2024, 3, 20],
        "created_at": [2024, 3, 1, 8, 0, 0, 500000000],
        "customer_document": "111.444.777-35"
    }"#;

    let record: ReservationRecord = parse_reservation(payload).unwrap();

    assert_eq!(record.id, "res-001");
    assert_eq!(record.status, Some(String::from("CONFIRMED")));
    assert_eq!(
        record.start_date,
        Some(TimestampField::from(vec![2024, 3, 15, 10, 30]))
    );
    assert_eq!(record.end_date, Some(TimestampField::from(vec![2024, 3, 20])));
    assert_eq!(
        record.customer_document,
        Some(String::from("111.444.777-35"))
    );
}

#[test]
fn test_parse_reservation_with_text_dates() {
    let payload = r#"{
        "id": "res-002",
        "status": "PENDING",
        "start_date": "2024-03-15T10:30:00",
        "end_date": "2024-03-20T18:00:00"
    }"#;

    let record: ReservationRecord = parse_reservation(payload).unwrap();

    assert_eq!(
        record.start_date,
        Some(TimestampField::from("2024-03-15T10:30:00"))
    );
    assert_eq!(
        record.end_date,
        Some(TimestampField::from("2024-03-20T18:00:00"))
    );
}

#[test]
fn test_parse_reservation_with_missing_optional_fields() {
    let payload = r#"{"id": "res-003"}"#;

    let record: ReservationRecord = parse_reservation(payload).unwrap();

    assert_eq!(record.id, "res-003");
    assert_eq!(record.status, None);
    assert_eq!(record.start_date, None);
    assert_eq!(record.end_date, None);
    assert_eq!(record.created_at, None);
    assert_eq!(record.customer_document, None);
}

#[test]
fn test_parse_reservation_ignores_unknown_fields() {
    let payload = r#"{
        "id": "res-004",
        "status": "PENDING",
        "vehicle_plate": "ABC-1234",
        "daily_rate": 129.90
    }"#;

    let record: ReservationRecord = parse_reservation(payload).unwrap();

    assert_eq!(record.id, "res-004");
    assert_eq!(record.status, Some(String::from("PENDING")));
}

#[test]
fn test_parse_reservation_rejects_malformed_payload() {
    let result: Result<ReservationRecord, RecordError> = parse_reservation("{not json");

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("reservation"));
}

#[test]
fn test_parse_reservation_rejects_missing_id() {
    let payload = r#"{"status": "PENDING"}"#;

    let result: Result<ReservationRecord, RecordError> = parse_reservation(payload);

    assert!(result.is_err());
}

#[test]
fn test_reservation_record_round_trips_through_json() {
    let payload = r#"{
        "id": "res-005",
        "status": "IN_PROGRESS",
        "start_date": [2024, 6, 1],
        "customer_document": "11144477735"
    }"#;
    let record: ReservationRecord = parse_reservation(payload).unwrap();

    let json: String = serde_json::to_string(&record).unwrap();
    let reparsed: ReservationRecord = parse_reservation(&json).unwrap();

    assert_eq!(record, reparsed);
}

// ============================================================================
// Customer Identity Tests
// ============================================================================

#[test]
fn test_customer_identity_with_valid_document() {
    let payload = r#"{"id": "res-006", "customer_document": "111.444.777-35"}"#;
    let record: ReservationRecord = parse_reservation(payload).unwrap();

    let identity: Option<IdentityNumber> = record.customer_identity();

    assert!(identity.is_some());
    assert_eq!(identity.unwrap().value(), "11144477735");
}

#[test]
fn test_customer_identity_with_invalid_document() {
    let payload = r#"{"id": "res-007", "customer_document": "111.111.111-11"}"#;
    let record: ReservationRecord = parse_reservation(payload).unwrap();

    assert!(record.customer_identity().is_none());
}

#[test]
fn test_customer_identity_with_absent_document() {
    let payload = r#"{"id": "res-008"}"#;
    let record: ReservationRecord = parse_reservation(payload).unwrap();

    assert!(record.customer_identity().is_none());
}

// ============================================================================
// Maintenance Record Parsing Tests
// ============================================================================

#[test]
fn test_parse_maintenance_with_encoded_dates() {
    let payload = r#"{
        "id": "mnt-001",
        "status": "SCHEDULED",
        "scheduled_date": [2024, 4, 2, 9, 0],
        "completed_date": null
    }"#;

    let record: MaintenanceRecord = parse_maintenance(payload).unwrap();

    assert_eq!(record.id, "mnt-001");
    assert_eq!(record.status, Some(String::from("SCHEDULED")));
    assert_eq!(
        record.scheduled_date,
        Some(TimestampField::from(vec![2024, 4, 2, 9, 0]))
    );
    assert_eq!(record.completed_date, None);
}

#[test]
fn test_parse_maintenance_with_missing_optional_fields() {
    let payload = r#"{"id": "mnt-002"}"#;

    let record: MaintenanceRecord = parse_maintenance(payload).unwrap();

    assert_eq!(record.id, "mnt-002");
    assert_eq!(record.status, None);
    assert_eq!(record.scheduled_date, None);
    assert_eq!(record.completed_date, None);
}

#[test]
fn test_parse_maintenance_rejects_malformed_payload() {
    let result: Result<MaintenanceRecord, RecordError> = parse_maintenance("[1, 2, 3]");

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("maintenance"));
}
