//! Inclusive date ranges for filter selections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date interval `[start, end]`.
///
/// A range whose start is after its end is valid but contains no dates, so
/// filtering with it yields an empty subset rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the interval.
    pub start: NaiveDate,
    /// Last day of the interval.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if the range contains no dates (start after end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 1, 1), true)]
    #[case(date(2024, 6, 15), true)]
    #[case(date(2024, 12, 31), true)]
    #[case(date(2023, 12, 31), false)]
    #[case(date(2025, 1, 1), false)]
    fn test_contains_is_inclusive(#[case] probe: NaiveDate, #[case] expected: bool) {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(range.contains(probe), expected);
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(date(2024, 12, 31), date(2024, 1, 1));
        assert!(range.is_empty());
        assert!(!range.contains(date(2024, 6, 15)));
        assert!(!range.contains(range.start));
        assert!(!range.contains(range.end));
    }
}
