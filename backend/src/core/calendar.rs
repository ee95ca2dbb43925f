//! Calendar span for the generation run
//!
//! The generator walks a date range one day at a time. This module provides
//! the inclusive day iterator and timestamp assembly used by the
//! orchestrator.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Inclusive span of calendar days [start, end]
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sales_generator_core_rs::core::calendar::DateSpan;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let span = DateSpan::from_months(start, 1);
/// assert_eq!(span.days().count(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day of the span (inclusive)
    pub start: NaiveDate,
    /// Last day of the span (inclusive)
    pub end: NaiveDate,
}

impl DateSpan {
    /// Create a span covering `months` months of 30 days from `start`
    ///
    /// # Panics
    /// Panics if months is zero
    pub fn from_months(start: NaiveDate, months: u32) -> Self {
        assert!(months > 0, "months must be positive");
        Self {
            start,
            end: start + Duration::days(30 * months as i64),
        }
    }

    /// Iterate over every day in the span, start through end inclusive
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let mut current = Some(self.start);
        let end = self.end;
        std::iter::from_fn(move || {
            let day = current?;
            if day > end {
                current = None;
                return None;
            }
            current = day.succ_opt();
            Some(day)
        })
    }

    /// Number of days in the span
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Build a timestamp from a day plus an intra-day clock position.
///
/// # Panics
/// Panics if hour/minute/second are out of range
pub fn timestamp(date: NaiveDate, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, second)
        .expect("hour/minute/second out of range")
}

/// True when `date` is the first day of a month.
///
/// The orchestrator emits a monthly progress summary at this boundary.
pub fn is_month_start(date: NaiveDate) -> bool {
    date.day() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_span_is_inclusive_on_both_ends() {
        let span = DateSpan {
            start: date(2024, 3, 1),
            end: date(2024, 3, 3),
        };
        let days: Vec<_> = span.days().collect();
        assert_eq!(days, vec![date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 3)]);
        assert_eq!(span.len_days(), 3);
    }

    #[test]
    fn test_from_months_covers_thirty_days_per_month() {
        let span = DateSpan::from_months(date(2024, 1, 1), 6);
        assert_eq!(span.end, date(2024, 6, 29));
        assert_eq!(span.len_days(), 181);
    }

    #[test]
    #[should_panic(expected = "months must be positive")]
    fn test_zero_months_panics() {
        DateSpan::from_months(date(2024, 1, 1), 0);
    }

    #[test]
    fn test_timestamp_assembly() {
        let ts = timestamp(date(2024, 5, 10), 19, 30, 45);
        assert_eq!(ts.to_string(), "2024-05-10 19:30:45");
    }

    #[test]
    fn test_month_start_detection() {
        assert!(is_month_start(date(2024, 4, 1)));
        assert!(!is_month_start(date(2024, 4, 2)));
    }
}
