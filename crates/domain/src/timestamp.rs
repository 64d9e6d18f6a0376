// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire timestamp decoding and display formatting.
//!
//! The remote service encodes every date-bearing field as an array of up
//! to seven integers: `[year, month, day, hour, minute, second, nanos]`.
//! Only the first three are required; absent time-of-day components
//! default to zero. Some fields arrive instead as ISO-8601 strings, and
//! both forms decode through the same contract here. Decoding is
//! deterministic and never panics; malformed input is a typed error.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

/// Nanoseconds per millisecond; the wire's sub-second fraction is
/// truncated to millisecond precision.
const NANOS_PER_MILLI: i64 = 1_000_000;

/// The array wire form of a timestamp.
///
/// The month element is 1-based, matching `time::Month`, so no index
/// adjustment happens during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedTimestamp {
    elements: Vec<i64>,
}

impl EncodedTimestamp {
    /// Wraps raw wire elements.
    #[must_use]
    pub const fn new(elements: Vec<i64>) -> Self {
        Self { elements }
    }

    /// Returns the raw elements.
    #[must_use]
    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    /// Decodes the array into a calendar value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimestampTooShort` when fewer than three
    /// elements are present, and
    /// `DomainError::TimestampComponentOutOfRange` when any component
    /// cannot form a representable date or time.
    pub fn decode(&self) -> Result<PrimitiveDateTime, DomainError> {
        let elements = self.elements();
        if elements.len() < 3 {
            return Err(DomainError::TimestampTooShort {
                len: elements.len(),
            });
        }

        let year = component_i32("year", elements[0])?;
        let month_number = component_u8("month", elements[1])?;
        let month = Month::try_from(month_number).map_err(|_| {
            DomainError::TimestampComponentOutOfRange {
                component: "month",
                value: elements[1],
            }
        })?;
        let day = component_u8("day", elements[2])?;

        let hour = component_u8("hour", element_or_zero(elements, 3))?;
        let minute = component_u8("minute", element_or_zero(elements, 4))?;
        let second = component_u8("second", element_or_zero(elements, 5))?;
        // Division truncates toward zero, so small negative fractions
        // must be rejected before it runs.
        let nanos = element_or_zero(elements, 6);
        if nanos < 0 {
            return Err(DomainError::TimestampComponentOutOfRange {
                component: "nanosecond",
                value: nanos,
            });
        }
        let millisecond = component_u16("nanosecond", nanos / NANOS_PER_MILLI, nanos)?;

        let date = Date::from_calendar_date(year, month, day).map_err(|e| match e.name() {
            "year" => DomainError::TimestampComponentOutOfRange {
                component: "year",
                value: elements[0],
            },
            _ => DomainError::TimestampComponentOutOfRange {
                component: "day",
                value: elements[2],
            },
        })?;

        let time = Time::from_hms_milli(hour, minute, second, millisecond).map_err(|e| {
            match e.name() {
                "hour" => DomainError::TimestampComponentOutOfRange {
                    component: "hour",
                    value: i64::from(hour),
                },
                "minute" => DomainError::TimestampComponentOutOfRange {
                    component: "minute",
                    value: i64::from(minute),
                },
                "second" => DomainError::TimestampComponentOutOfRange {
                    component: "second",
                    value: i64::from(second),
                },
                _ => DomainError::TimestampComponentOutOfRange {
                    component: "nanosecond",
                    value: nanos,
                },
            }
        })?;

        Ok(PrimitiveDateTime::new(date, time))
    }
}

impl From<Vec<i64>> for EncodedTimestamp {
    fn from(elements: Vec<i64>) -> Self {
        Self::new(elements)
    }
}

/// A date-bearing wire field: encoded array or ISO-8601-like string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampField {
    /// The numeric array form.
    Encoded(EncodedTimestamp),
    /// An already-serialized ISO-8601-like string.
    Text(String),
}

impl TimestampField {
    /// Decodes whichever wire form is present.
    ///
    /// # Errors
    ///
    /// Returns the decode error of the underlying form.
    pub fn decode(&self) -> Result<PrimitiveDateTime, DomainError> {
        match self {
            Self::Encoded(encoded) => encoded.decode(),
            Self::Text(text) => decode_timestamp_text(text),
        }
    }
}

impl From<Vec<i64>> for TimestampField {
    fn from(elements: Vec<i64>) -> Self {
        Self::Encoded(EncodedTimestamp::new(elements))
    }
}

impl From<&str> for TimestampField {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Decodes an ISO-8601-like string into a calendar value.
///
/// Accepts a full datetime, a datetime with offset (the wall-clock
/// components are kept), or a bare date (midnight assumed).
///
/// # Errors
///
/// Returns `DomainError::TimestampParseError` if none of the accepted
/// forms parse.
pub fn decode_timestamp_text(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    let iso = &time::format_description::well_known::Iso8601::DEFAULT;

    if let Ok(datetime) = PrimitiveDateTime::parse(value, iso) {
        return Ok(datetime);
    }
    if let Ok(datetime) = OffsetDateTime::parse(value, iso) {
        return Ok(PrimitiveDateTime::new(datetime.date(), datetime.time()));
    }
    match Date::parse(value, iso) {
        Ok(date) => Ok(date.midnight()),
        Err(error) => Err(DomainError::TimestampParseError {
            value: value.to_string(),
            error: error.to_string(),
        }),
    }
}

/// Formats a decoded value as `dd/MM/yyyy`.
#[must_use]
pub fn format_date(datetime: PrimitiveDateTime) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        datetime.day(),
        u8::from(datetime.month()),
        datetime.year()
    )
}

/// Formats a decoded value as `dd/MM/yyyy HH:mm` on a 24-hour clock.
#[must_use]
pub fn format_date_time(datetime: PrimitiveDateTime) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}",
        datetime.day(),
        u8::from(datetime.month()),
        datetime.year(),
        datetime.hour(),
        datetime.minute()
    )
}

/// Renders the `YYYY-MM-DD` key for a calendar day.
///
/// Lexicographic order of these keys matches chronological order.
#[must_use]
pub fn format_day_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn element_or_zero(elements: &[i64], index: usize) -> i64 {
    elements.get(index).copied().unwrap_or(0)
}

fn component_i32(component: &'static str, value: i64) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| DomainError::TimestampComponentOutOfRange { component, value })
}

fn component_u8(component: &'static str, value: i64) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| DomainError::TimestampComponentOutOfRange { component, value })
}

fn component_u16(component: &'static str, value: i64, raw: i64) -> Result<u16, DomainError> {
    u16::try_from(value).map_err(|_| DomainError::TimestampComponentOutOfRange {
        component,
        value: raw,
    })
}
