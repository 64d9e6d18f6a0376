// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary handlers for status change requests.
//!
//! Each handler normalizes the request's status text, builds a core
//! command, applies it, and translates any rejection into an API error.
//! On success the caller receives the response plus the audit event;
//! persisting both the new status and the event stays with the caller.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::normalize::{parse_maintenance_status, parse_reservation_status};
use crate::request_response::{
    ChangeMaintenanceStatusRequest, ChangeReservationStatusRequest, ChangeStatusResponse,
};
use frota_rent::{Command, TransitionResult, apply};
use frota_rent_audit::{Actor, Cause, TransitionEvent};
use frota_rent_domain::{MaintenanceStatus, ReservationStatus};

/// Changes a reservation's lifecycle status.
///
/// # Arguments
///
/// * `request` - The status change request with raw status text
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok((ChangeStatusResponse, TransitionEvent))` on success; the event
///   is handed back for the caller to persist
/// * `Err(ApiError)` if the status text is invalid or the transition is
///   not permitted
///
/// # Errors
///
/// Returns an error if:
/// - Either status string is not a known reservation status
/// - The requested transition violates the reservation lifecycle rules
pub fn change_reservation_status(
    request: &ChangeReservationStatusRequest,
    actor: Actor,
    cause: Cause,
) -> Result<(ChangeStatusResponse, TransitionEvent), ApiError> {
    let current: ReservationStatus =
        parse_reservation_status(&request.current_status).map_err(translate_domain_error)?;
    let requested: ReservationStatus =
        parse_reservation_status(&request.new_status).map_err(translate_domain_error)?;

    let command: Command = Command::ChangeReservationStatus {
        reservation_id: request.reservation_id.clone(),
        current,
        requested,
    };

    let result: TransitionResult = apply(command, actor, cause).map_err(|err| {
        tracing::warn!(
            "Rejected status change for reservation {}: {}",
            request.reservation_id,
            err
        );
        translate_core_error(err)
    })?;

    let response: ChangeStatusResponse = ChangeStatusResponse {
        entity_id: request.reservation_id.clone(),
        previous_status: result.previous.as_str().to_string(),
        new_status: result.current.as_str().to_string(),
        message: format!(
            "Reservation '{}' transitioned from {} to {}",
            request.reservation_id, result.previous, result.current
        ),
    };

    Ok((response, result.event))
}

/// Changes a maintenance record's lifecycle status.
///
/// # Arguments
///
/// * `request` - The status change request with raw status text
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok((ChangeStatusResponse, TransitionEvent))` on success; the event
///   is handed back for the caller to persist
/// * `Err(ApiError)` if the status text is invalid or the transition is
///   not permitted
///
/// # Errors
///
/// Returns an error if:
/// - Either status string is not a known maintenance status
/// - The requested transition violates the maintenance lifecycle rules
pub fn change_maintenance_status(
    request: &ChangeMaintenanceStatusRequest,
    actor: Actor,
    cause: Cause,
) -> Result<(ChangeStatusResponse, TransitionEvent), ApiError> {
    let current: MaintenanceStatus =
        parse_maintenance_status(&request.current_status).map_err(translate_domain_error)?;
    let requested: MaintenanceStatus =
        parse_maintenance_status(&request.new_status).map_err(translate_domain_error)?;

    let command: Command = Command::ChangeMaintenanceStatus {
        record_id: request.record_id.clone(),
        current,
        requested,
    };

    let result: TransitionResult = apply(command, actor, cause).map_err(|err| {
        tracing::warn!(
            "Rejected status change for maintenance record {}: {}",
            request.record_id,
            err
        );
        translate_core_error(err)
    })?;

    let response: ChangeStatusResponse = ChangeStatusResponse {
        entity_id: request.record_id.clone(),
        previous_status: result.previous.as_str().to_string(),
        new_status: result.current.as_str().to_string(),
        message: format!(
            "Maintenance record '{}' transitioned from {} to {}",
            request.record_id, result.previous, result.current
        ),
    };

    Ok((response, result.event))
}
