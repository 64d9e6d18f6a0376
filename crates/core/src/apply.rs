// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{StatusValue, TransitionResult};
use frota_rent_audit::{Actor, Cause, EntityKind, EntityRef, TransitionEvent};

/// Applies a command, producing the new status and its audit event.
///
/// The engine is pure: it validates the requested transition against the
/// lifecycle rules and reports the outcome. Persisting the new status and
/// the event is the caller's responsibility.
///
/// # Arguments
///
/// * `command` - The lifecycle change to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the previous status, the new status,
///   and the audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The requested transition violates the lifecycle rules
pub fn apply(command: Command, actor: Actor, cause: Cause) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ChangeReservationStatus {
            reservation_id,
            current,
            requested,
        } => {
            current.validate_transition(requested)?;

            let entity: EntityRef = EntityRef::new(EntityKind::Reservation, reservation_id);
            let event: TransitionEvent = TransitionEvent::new(
                actor,
                cause,
                entity,
                String::from(current.as_str()),
                String::from(requested.as_str()),
            );

            Ok(TransitionResult {
                previous: StatusValue::Reservation(current),
                current: StatusValue::Reservation(requested),
                event,
            })
        }
        Command::ChangeMaintenanceStatus {
            record_id,
            current,
            requested,
        } => {
            current.validate_transition(requested)?;

            let entity: EntityRef = EntityRef::new(EntityKind::Maintenance, record_id);
            let event: TransitionEvent = TransitionEvent::new(
                actor,
                cause,
                entity,
                String::from(current.as_str()),
                String::from(requested.as_str()),
            );

            Ok(TransitionResult {
                previous: StatusValue::Maintenance(current),
                current: StatusValue::Maintenance(requested),
                event,
            })
        }
    }
}
