// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-bucketed activity aggregation.
//!
//! Turns a collection of timestamp-bearing records into an ordered
//! per-day series for activity and volume charts. Records that cannot
//! be dated are skipped; the aggregation itself never fails.

use crate::timestamp::{TimestampField, format_day_key};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// One day's aggregate count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Calendar day in `YYYY-MM-DD` form.
    pub day: String,
    /// Number of records dated that day. Always at least one.
    pub count: usize,
}

/// Buckets records by the calendar day of a selected timestamp field.
///
/// Each record's timestamp is decoded and truncated to its calendar
/// day; counts accumulate per day. Records whose selector yields
/// nothing, or whose timestamp fails to decode, are skipped without
/// affecting the rest. The result is ordered by ascending day and is
/// independent of input order.
///
/// # Arguments
///
/// * `records` - The records to aggregate
/// * `timestamp_selector` - Picks the date-bearing field off a record
///
/// # Returns
///
/// Day buckets in ascending calendar order, one per day that has at
/// least one datable record. Days with no records are not zero-filled.
#[must_use]
pub fn aggregate_by_day<T, F>(records: &[T], timestamp_selector: F) -> Vec<DayBucket>
where
    F: Fn(&T) -> Option<&TimestampField>,
{
    let mut counts: BTreeMap<Date, usize> = BTreeMap::new();

    for record in records {
        let Some(field) = timestamp_selector(record) else {
            continue;
        };
        let Ok(decoded) = field.decode() else {
            continue;
        };
        *counts.entry(decoded.date()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(day, count)| DayBucket {
            day: format_day_key(day),
            count,
        })
        .collect()
}

/// Counts how many records the aggregation would skip.
///
/// A record is skipped when the selector yields nothing or its
/// timestamp fails to decode. Useful for surfacing data-quality
/// problems alongside a chart without failing the aggregation.
#[must_use]
pub fn count_undatable_records<T, F>(records: &[T], timestamp_selector: F) -> usize
where
    F: Fn(&T) -> Option<&TimestampField>,
{
    records
        .iter()
        .filter(|record| timestamp_selector(record).is_none_or(|field| field.decode().is_err()))
        .count()
}
