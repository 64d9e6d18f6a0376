// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Reservation status string is not a recognized value.
    InvalidReservationStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Maintenance status string is not a recognized value.
    InvalidMaintenanceStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// Encoded timestamp has fewer than the three required elements.
    TimestampTooShort {
        /// Number of elements present.
        len: usize,
    },
    /// Encoded timestamp component is outside its representable range.
    TimestampComponentOutOfRange {
        /// Which component failed (e.g. "month", "day").
        component: &'static str,
        /// The offending value.
        value: i64,
    },
    /// Failed to parse a timestamp from string form.
    TimestampParseError {
        /// The invalid input string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Identity number does not contain exactly 11 digits.
    IdentityLength {
        /// Number of digits after normalization.
        len: usize,
    },
    /// Identity number consists of a single repeated digit.
    IdentityRepeatedDigits,
    /// Identity number check digits do not match the computed values.
    IdentityChecksum,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReservationStatus { status } => {
                write!(f, "Invalid reservation status: '{status}'")
            }
            Self::InvalidMaintenanceStatus { status } => {
                write!(f, "Invalid maintenance status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::TimestampTooShort { len } => {
                write!(
                    f,
                    "Encoded timestamp has {len} elements. Requires at least year, month, and day"
                )
            }
            Self::TimestampComponentOutOfRange { component, value } => {
                write!(f, "Timestamp {component} value {value} is out of range")
            }
            Self::TimestampParseError { value, error } => {
                write!(f, "Failed to parse timestamp '{value}': {error}")
            }
            Self::IdentityLength { len } => {
                write!(
                    f,
                    "Identity number has {len} digits. Must have exactly 11"
                )
            }
            Self::IdentityRepeatedDigits => {
                write!(f, "Identity number cannot consist of a single repeated digit")
            }
            Self::IdentityChecksum => {
                write!(f, "Identity number check digits do not match")
            }
        }
    }
}

impl std::error::Error for DomainError {}
