//! Reporting periods: a calendar month plus clamping of caller input.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::DateWindow;

/// Year range accepted from callers; anything outside falls back to the
/// current month.
pub const MIN_REPORT_YEAR: i32 = 2020;
pub const MAX_REPORT_YEAR: i32 = 2030;

/// A calendar month used as a reporting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    first_day: NaiveDate,
}

impl ReportPeriod {
    /// Normalizes caller input: well-formed year/month pairs inside the
    /// accepted range are taken as-is, everything else resolves to the month
    /// containing `today`.
    pub fn from_input(year: i32, month: u32, today: NaiveDate) -> Self {
        Self::from_input_bounded(year, month, today, MIN_REPORT_YEAR, MAX_REPORT_YEAR)
    }

    /// Same as [`from_input`](Self::from_input) with caller-supplied year
    /// bounds (taken from the reporting configuration).
    pub fn from_input_bounded(
        year: i32,
        month: u32,
        today: NaiveDate,
        min_year: i32,
        max_year: i32,
    ) -> Self {
        if (min_year..=max_year).contains(&year) && (1..=12).contains(&month) {
            if let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) {
                return Self { first_day };
            }
        }
        Self::containing(today)
    }

    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The immediately preceding month.
    pub fn prev(&self) -> Self {
        let (year, month) = if self.month() == 1 {
            (self.year() - 1, 12)
        } else {
            (self.year(), self.month() - 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// Half-open window covering the whole month.
    pub fn window(&self) -> DateWindow {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        let end = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self.first_day);
        DateWindow {
            start: self.first_day,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_input_is_taken_verbatim() {
        let period = ReportPeriod::from_input(2025, 3, date(2024, 6, 15));
        assert_eq!(period.year(), 2025);
        assert_eq!(period.month(), 3);
    }

    #[test]
    fn out_of_range_input_falls_back_to_today() {
        let today = date(2025, 6, 15);
        for (year, month) in [(1999, 3), (2031, 3), (2025, 0), (2025, 13)] {
            let period = ReportPeriod::from_input(year, month, today);
            assert_eq!((period.year(), period.month()), (2025, 6));
        }
    }

    #[test]
    fn window_spans_the_whole_month() {
        let window = ReportPeriod::from_input(2025, 2, date(2025, 2, 1)).window();
        assert_eq!(window.start, date(2025, 2, 1));
        assert_eq!(window.end, date(2025, 3, 1));
        assert_eq!(window.days(), 28);
    }

    #[test]
    fn prev_crosses_year_boundaries() {
        let period = ReportPeriod::from_input(2025, 1, date(2025, 1, 10));
        let prev = period.prev();
        assert_eq!((prev.year(), prev.month()), (2024, 12));
    }
}
