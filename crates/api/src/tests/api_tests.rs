// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Comprehensive API layer tests organized by behavior.

use frota_rent::CoreError;
use frota_rent_audit::{EntityKind, TransitionEvent};
use frota_rent_domain::DomainError;

use crate::{
    ApiError, ChangeStatusResponse, change_maintenance_status, change_reservation_status,
    translate_core_error, translate_domain_error,
};

use super::helpers::{
    create_maintenance_request, create_reservation_request, create_test_actor, create_test_cause,
};

// ============================================================================
// Reservation Handler Tests
// ============================================================================

#[test]
fn test_change_reservation_status_succeeds() {
    let request = create_reservation_request("PENDING", "CONFIRMED");

    let result = change_reservation_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_ok());
    let (response, event): (ChangeStatusResponse, TransitionEvent) = result.unwrap();
    assert_eq!(response.entity_id, "res-001");
    assert_eq!(response.previous_status, "PENDING");
    assert_eq!(response.new_status, "CONFIRMED");
    assert!(response.message.contains("res-001"));
    assert!(response.message.contains("PENDING"));
    assert!(response.message.contains("CONFIRMED"));

    assert_eq!(event.entity.kind, EntityKind::Reservation);
    assert_eq!(event.entity.id, "res-001");
    assert_eq!(event.previous, "PENDING");
    assert_eq!(event.current, "CONFIRMED");
    assert_eq!(event.actor.id, "agent-123");
    assert_eq!(event.cause.id, "api-req-456");
}

#[test]
fn test_change_reservation_status_rejects_unknown_text() {
    let request = create_reservation_request("PAUSED", "CONFIRMED");

    let result = change_reservation_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_err());
    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
    if let ApiError::InvalidInput { field, message } = err {
        assert_eq!(field, "status");
        assert!(message.contains("PAUSED"));
    }
}

#[test]
fn test_change_reservation_status_rejects_illegal_transition() {
    let request = create_reservation_request("PENDING", "COMPLETED");

    let result = change_reservation_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_err());
    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
    if let ApiError::DomainRuleViolation { rule, message } = err {
        assert_eq!(rule, "status_transition");
        assert!(message.contains("PENDING"));
        assert!(message.contains("COMPLETED"));
    }
}

#[test]
fn test_change_reservation_status_rejects_terminal_state_change() {
    let request = create_reservation_request("CANCELLED", "PENDING");

    let result = change_reservation_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_err());
    let err: ApiError = result.unwrap_err();
    if let ApiError::DomainRuleViolation { message, .. } = err {
        assert!(message.contains("terminal"));
    } else {
        panic!("Expected a domain rule violation, got: {err}");
    }
}

// ============================================================================
// Maintenance Handler Tests
// ============================================================================

#[test]
fn test_change_maintenance_status_succeeds() {
    let request = create_maintenance_request("SCHEDULED", "IN_PROGRESS");

    let result = change_maintenance_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_ok());
    let (response, event) = result.unwrap();
    assert_eq!(response.entity_id, "mnt-042");
    assert_eq!(response.previous_status, "SCHEDULED");
    assert_eq!(response.new_status, "IN_PROGRESS");
    assert_eq!(event.entity.kind, EntityKind::Maintenance);
    assert_eq!(event.entity.id, "mnt-042");
}

#[test]
fn test_change_maintenance_status_rejects_cancel_after_start() {
    let request = create_maintenance_request("IN_PROGRESS", "CANCELLED");

    let result = change_maintenance_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation { .. }
    ));
}

#[test]
fn test_change_maintenance_status_rejects_unknown_text() {
    let request = create_maintenance_request("SCHEDULED", "POSTPONED");

    let result = change_maintenance_status(&request, create_test_actor(), create_test_cause());

    assert!(result.is_err());
    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
    if let ApiError::InvalidInput { message, .. } = err {
        assert!(message.contains("POSTPONED"));
    }
}

// ============================================================================
// Response Serialization Tests
// ============================================================================

#[test]
fn test_change_status_response_serializes_for_the_caller() {
    let request = create_reservation_request("CONFIRMED", "IN_PROGRESS");

    let (response, _event) =
        change_reservation_status(&request, create_test_actor(), create_test_cause()).unwrap();

    let json: String = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"entity_id\":\"res-001\""));
    assert!(json.contains("\"previous_status\":\"CONFIRMED\""));
    assert!(json.contains("\"new_status\":\"IN_PROGRESS\""));
}

// ============================================================================
// Error Translation Tests
// ============================================================================

#[test]
fn test_translate_domain_error_for_status_text() {
    let err: ApiError = translate_domain_error(DomainError::InvalidReservationStatus {
        status: String::from("PAUSED"),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("status"),
            message: String::from("Unknown reservation status 'PAUSED'"),
        }
    );
}

#[test]
fn test_translate_domain_error_for_identity_failures() {
    let length_err: ApiError = translate_domain_error(DomainError::IdentityLength { len: 10 });
    let repeat_err: ApiError = translate_domain_error(DomainError::IdentityRepeatedDigits);
    let checksum_err: ApiError = translate_domain_error(DomainError::IdentityChecksum);

    for err in [length_err, repeat_err, checksum_err] {
        assert!(matches!(
            err,
            ApiError::InvalidInput { ref field, .. } if field == "customer_document"
        ));
    }
}

#[test]
fn test_translate_domain_error_for_timestamp_failures() {
    let err: ApiError = translate_domain_error(DomainError::TimestampComponentOutOfRange {
        component: "month",
        value: 13,
    });

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "timestamp"
    ));
}

#[test]
fn test_translate_core_error_maps_domain_violation() {
    let core_err: CoreError = CoreError::DomainViolation(DomainError::InvalidStatusTransition {
        from: String::from("COMPLETED"),
        to: String::from("PENDING"),
        reason: String::from("cannot transition from terminal state"),
    });

    let err: ApiError = translate_core_error(core_err);

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn test_api_error_display() {
    let violation: ApiError = ApiError::DomainRuleViolation {
        rule: String::from("status_transition"),
        message: String::from("test message"),
    };
    assert_eq!(
        format!("{violation}"),
        "Domain rule violation (status_transition): test message"
    );

    let input: ApiError = ApiError::InvalidInput {
        field: String::from("status"),
        message: String::from("test error"),
    };
    assert_eq!(
        format!("{input}"),
        "Invalid input for field 'status': test error"
    );

    let missing: ApiError = ApiError::ResourceNotFound {
        resource_type: String::from("Reservation"),
        message: String::from("no reservation with id 'res-999'"),
    };
    assert_eq!(
        format!("{missing}"),
        "Reservation not found: no reservation with id 'res-999'"
    );

    let internal: ApiError = ApiError::Internal {
        message: String::from("storage unavailable"),
    };
    assert_eq!(format!("{internal}"), "Internal error: storage unavailable");
}
