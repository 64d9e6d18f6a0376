// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use frota_rent_audit::{Actor, ActorKind, Cause};
use frota_rent_domain::TimestampField;

use crate::{
    ChangeMaintenanceStatusRequest, ChangeReservationStatusRequest, MaintenanceRecord,
    ReservationRecord,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("agent-123"), ActorKind::Agent)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_reservation_request(current: &str, new: &str) -> ChangeReservationStatusRequest {
    ChangeReservationStatusRequest {
        reservation_id: String::from("res-001"),
        current_status: String::from(current),
        new_status: String::from(new),
    }
}

pub fn create_maintenance_request(current: &str, new: &str) -> ChangeMaintenanceStatusRequest {
    ChangeMaintenanceStatusRequest {
        record_id: String::from("mnt-042"),
        current_status: String::from(current),
        new_status: String::from(new),
    }
}

pub fn create_reservation_with_start(id: &str, start_date: TimestampField) -> ReservationRecord {
    ReservationRecord {
        id: String::from(id),
        status: Some(String::from("CONFIRMED")),
        start_date: Some(start_date),
        end_date: None,
        created_at: None,
        customer_document: None,
    }
}

pub fn create_reservation_without_start(id: &str) -> ReservationRecord {
    ReservationRecord {
        id: String::from(id),
        status: Some(String::from("CONFIRMED")),
        start_date: None,
        end_date: None,
        created_at: None,
        customer_document: None,
    }
}

pub fn create_maintenance_with_schedule(
    id: &str,
    scheduled_date: TimestampField,
) -> MaintenanceRecord {
    MaintenanceRecord {
        id: String::from(id),
        status: Some(String::from("SCHEDULED")),
        scheduled_date: Some(scheduled_date),
        completed_date: None,
    }
}
