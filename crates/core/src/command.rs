// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use frota_rent_domain::{MaintenanceStatus, ReservationStatus};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request lifecycle changes. Each command
/// carries the status the caller last observed so the engine can validate
/// the requested change without reaching into storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move a reservation to a new lifecycle status.
    ChangeReservationStatus {
        /// The reservation being changed.
        reservation_id: String,
        /// The status the caller last observed.
        current: ReservationStatus,
        /// The status the caller wants to reach.
        requested: ReservationStatus,
    },
    /// Move a maintenance record to a new lifecycle status.
    ChangeMaintenanceStatus {
        /// The maintenance record being changed.
        record_id: String,
        /// The status the caller last observed.
        current: MaintenanceStatus,
        /// The status the caller wants to reach.
        requested: MaintenanceStatus,
    },
}

impl Command {
    /// Returns the identifier of the entity this command targets.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            Self::ChangeReservationStatus { reservation_id, .. } => reservation_id,
            Self::ChangeMaintenanceStatus { record_id, .. } => record_id,
        }
    }
}
