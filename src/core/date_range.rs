use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Inclusive calendar interval used to window statistics queries.
///
/// Timestamps are compared at date granularity: an entity stamped anywhere
/// on the end date still falls inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the timestamp's calendar date falls inside [start, end].
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, both endpoints included.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Smallest range covering both `self` and `other`.
    ///
    /// Endpoint order is deliberately not assumed: the earliest start and
    /// the latest end win, whichever operand they come from.
    pub fn envelope(&self, other: &DateRange) -> DateRange {
        DateRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Build a date, surfacing out-of-range years as validation errors.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::validation(format!("Date {:04}-{:02}-{:02} is not representable", year, month, day))
    })
}
