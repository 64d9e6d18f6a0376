// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod charts;
mod error;
mod handlers;
mod normalize;
mod records;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use charts::{maintenance_scheduled_series, reservation_start_series};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{change_maintenance_status, change_reservation_status};
pub use normalize::{parse_maintenance_status, parse_reservation_status};
pub use records::{
    MaintenanceRecord, RecordError, ReservationRecord, parse_maintenance, parse_reservation,
};
pub use request_response::{
    ChangeMaintenanceStatusRequest, ChangeReservationStatusRequest, ChangeStatusResponse,
};
