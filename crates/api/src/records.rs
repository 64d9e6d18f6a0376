// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire-facing record types returned by the remote service.
//!
//! Deserialization is deliberately lenient: status arrives as free-form
//! text and every date field may be absent, an encoded array, or an ISO
//! string. Normalization into closed types happens explicitly at the
//! boundary, never inside serde.

use frota_rent_domain::{IdentityNumber, TimestampField};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record payload errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The payload did not match the expected record shape.
    #[error("Failed to parse {kind} record: {source}")]
    MalformedPayload {
        /// The record kind being parsed.
        kind: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A reservation as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// The reservation identifier.
    pub id: String,
    /// The free-form status text. Unknown values arrive intact.
    #[serde(default)]
    pub status: Option<String>,
    /// When the rental begins.
    #[serde(default)]
    pub start_date: Option<TimestampField>,
    /// When the rental ends.
    #[serde(default)]
    pub end_date: Option<TimestampField>,
    /// When the reservation was created.
    #[serde(default)]
    pub created_at: Option<TimestampField>,
    /// The customer's identity document, digits optionally separated.
    #[serde(default)]
    pub customer_document: Option<String>,
}

impl ReservationRecord {
    /// Parses the customer document into a validated identity number.
    ///
    /// Returns `None` when the record carries no document or the document
    /// fails validation. Callers that need the specific failure should
    /// run `IdentityNumber::parse` on the raw field themselves.
    #[must_use]
    pub fn customer_identity(&self) -> Option<IdentityNumber> {
        self.customer_document
            .as_deref()
            .and_then(|raw| IdentityNumber::parse(raw).ok())
    }
}

/// A vehicle maintenance record as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// The maintenance record identifier.
    pub id: String,
    /// The free-form status text. Unknown values arrive intact.
    #[serde(default)]
    pub status: Option<String>,
    /// When the work is scheduled to start.
    #[serde(default)]
    pub scheduled_date: Option<TimestampField>,
    /// When the work finished, once completed.
    #[serde(default)]
    pub completed_date: Option<TimestampField>,
}

/// Parses a reservation record from a JSON payload.
///
/// # Arguments
///
/// * `payload` - The JSON text returned by the remote service
///
/// # Errors
///
/// Returns `RecordError::MalformedPayload` if the payload does not match
/// the reservation record shape.
pub fn parse_reservation(payload: &str) -> Result<ReservationRecord, RecordError> {
    serde_json::from_str(payload).map_err(|source| RecordError::MalformedPayload {
        kind: "reservation",
        source,
    })
}

/// Parses a maintenance record from a JSON payload.
///
/// # Errors
///
/// Returns `RecordError::MalformedPayload` if the payload does not match
/// the maintenance record shape.
pub fn parse_maintenance(payload: &str) -> Result<MaintenanceRecord, RecordError> {
    serde_json::from_str(payload).map_err(|source| RecordError::MalformedPayload {
        kind: "maintenance",
        source,
    })
}
