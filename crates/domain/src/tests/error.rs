// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidReservationStatus {
        status: String::from("PAUSED"),
    };
    assert_eq!(format!("{err}"), "Invalid reservation status: 'PAUSED'");

    let err: DomainError = DomainError::InvalidMaintenanceStatus {
        status: String::from("PENDING"),
    };
    assert_eq!(format!("{err}"), "Invalid maintenance status: 'PENDING'");

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("COMPLETED"),
        to: String::from("PENDING"),
        reason: String::from("cannot transition from terminal state"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot transition from 'COMPLETED' to 'PENDING': cannot transition from terminal state"
    );

    let err: DomainError = DomainError::TimestampTooShort { len: 1 };
    assert_eq!(
        format!("{err}"),
        "Encoded timestamp has 1 elements. Requires at least year, month, and day"
    );

    let err: DomainError = DomainError::TimestampComponentOutOfRange {
        component: "month",
        value: 13,
    };
    assert_eq!(format!("{err}"), "Timestamp month value 13 is out of range");

    let err: DomainError = DomainError::TimestampParseError {
        value: String::from("10/01/2024"),
        error: String::from("unexpected character"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse timestamp '10/01/2024': unexpected character"
    );

    let err: DomainError = DomainError::IdentityLength { len: 10 };
    assert_eq!(
        format!("{err}"),
        "Identity number has 10 digits. Must have exactly 11"
    );

    let err: DomainError = DomainError::IdentityRepeatedDigits;
    assert_eq!(
        format!("{err}"),
        "Identity number cannot consist of a single repeated digit"
    );

    let err: DomainError = DomainError::IdentityChecksum;
    assert_eq!(format!("{err}"), "Identity number check digits do not match");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::IdentityChecksum);
    assert!(!err.to_string().is_empty());
}
