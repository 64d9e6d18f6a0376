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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod activity_series;
mod error;
mod identity;
mod maintenance_status;
mod presentation;
mod reservation_status;
mod timestamp;
mod transition;

#[cfg(test)]
mod tests;

pub use activity_series::{DayBucket, aggregate_by_day, count_undatable_records};
pub use error::DomainError;
pub use identity::{IdentityNumber, format_identity, is_valid_identity, normalize_identity};
pub use maintenance_status::MaintenanceStatus;
pub use presentation::StatusBadge;
pub use reservation_status::ReservationStatus;
pub use timestamp::{
    EncodedTimestamp, TimestampField, decode_timestamp_text, format_date, format_date_time,
    format_day_key,
};
pub use transition::TransitionRejected;
