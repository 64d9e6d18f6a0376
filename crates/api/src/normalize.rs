// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status text normalization.
//!
//! This is the only place free-form status text is accepted. Everything
//! past this boundary works with the closed enumerations, so screens and
//! handlers never compare status strings case-insensitively themselves.

use frota_rent_domain::{DomainError, MaintenanceStatus, ReservationStatus};

/// Normalizes free-form reservation status text into the closed enum.
///
/// Surrounding whitespace is trimmed and the text is uppercased before
/// matching, so `" pending "`, `"Pending"`, and `"PENDING"` all
/// normalize to the same value.
///
/// # Errors
///
/// Returns `DomainError::InvalidReservationStatus` for unknown status text.
pub fn parse_reservation_status(raw: &str) -> Result<ReservationStatus, DomainError> {
    raw.trim().to_uppercase().parse()
}

/// Normalizes free-form maintenance status text into the closed enum.
///
/// # Errors
///
/// Returns `DomainError::InvalidMaintenanceStatus` for unknown status text.
pub fn parse_maintenance_status(raw: &str) -> Result<MaintenanceStatus, DomainError> {
    raw.trim().to_uppercase().parse()
}
