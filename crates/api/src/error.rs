// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use frota_rent::CoreError;
use frota_rent_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidReservationStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown reservation status '{status}'"),
        },
        DomainError::InvalidMaintenanceStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown maintenance status '{status}'"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("status_transition"),
                message: format!("Cannot transition from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::TimestampTooShort { len } => ApiError::InvalidInput {
            field: String::from("timestamp"),
            message: format!("Encoded timestamp has {len} elements. Requires at least 3"),
        },
        DomainError::TimestampComponentOutOfRange { component, value } => ApiError::InvalidInput {
            field: String::from("timestamp"),
            message: format!("Timestamp {component} value {value} is out of range"),
        },
        DomainError::TimestampParseError { value, error } => ApiError::InvalidInput {
            field: String::from("timestamp"),
            message: format!("Failed to parse timestamp '{value}': {error}"),
        },
        DomainError::IdentityLength { len } => ApiError::InvalidInput {
            field: String::from("customer_document"),
            message: format!("Identity number has {len} digits. Must have exactly 11"),
        },
        DomainError::IdentityRepeatedDigits => ApiError::InvalidInput {
            field: String::from("customer_document"),
            message: String::from("Identity number cannot consist of a single repeated digit"),
        },
        DomainError::IdentityChecksum => ApiError::InvalidInput {
            field: String::from("customer_document"),
            message: String::from("Identity number check digits do not match"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
