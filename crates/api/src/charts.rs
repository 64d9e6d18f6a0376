// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chart-series helpers for dashboard activity charts.

use crate::records::{MaintenanceRecord, ReservationRecord};
use frota_rent_domain::{DayBucket, TimestampField, aggregate_by_day, count_undatable_records};

/// Buckets reservations by rental start day for the activity chart.
///
/// Records without a decodable start date are skipped; the skip count is
/// logged so a systematically broken feed shows up in the logs instead
/// of as a quietly thinner chart.
#[must_use]
pub fn reservation_start_series(records: &[ReservationRecord]) -> Vec<DayBucket> {
    let skipped: usize = count_undatable_records(records, select_start_date);
    if skipped > 0 {
        tracing::warn!(
            "Skipped {} reservation records without a decodable start date",
            skipped
        );
    }
    aggregate_by_day(records, select_start_date)
}

/// Buckets maintenance records by scheduled day for the workload chart.
#[must_use]
pub fn maintenance_scheduled_series(records: &[MaintenanceRecord]) -> Vec<DayBucket> {
    let skipped: usize = count_undatable_records(records, select_scheduled_date);
    if skipped > 0 {
        tracing::warn!(
            "Skipped {} maintenance records without a decodable scheduled date",
            skipped
        );
    }
    aggregate_by_day(records, select_scheduled_date)
}

fn select_start_date(record: &ReservationRecord) -> Option<&TimestampField> {
    record.start_date.as_ref()
}

fn select_scheduled_date(record: &MaintenanceRecord) -> Option<&TimestampField> {
    record.scheduled_date.as_ref()
}
