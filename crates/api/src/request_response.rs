// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to change a reservation's lifecycle status.
///
/// Status fields carry raw text exactly as received from the caller;
/// normalization happens in the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReservationStatusRequest {
    /// The reservation identifier.
    pub reservation_id: String,
    /// The status the caller last observed.
    pub current_status: String,
    /// The status the caller wants to reach.
    pub new_status: String,
}

/// API request to change a maintenance record's lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMaintenanceStatusRequest {
    /// The maintenance record identifier.
    pub record_id: String,
    /// The status the caller last observed.
    pub current_status: String,
    /// The status the caller wants to reach.
    pub new_status: String,
}

/// API response for an accepted status change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeStatusResponse {
    /// The identifier of the entity that changed.
    pub entity_id: String,
    /// The status before the change, in wire form.
    pub previous_status: String,
    /// The status after the change, in wire form.
    pub new_status: String,
    /// A success message.
    pub message: String,
}
