//! Business-day arithmetic. A business day is any calendar day that is not
//! Saturday or Sunday; no holiday calendar and no timezone conversion.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// True for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advances `n` business days from `from`, stepping one calendar day at a
/// time; weekend days do not count toward `n`. `n == 0` returns `from`
/// unchanged, even on a weekend.
pub fn advance_business_days(from: NaiveDate, n: u32) -> NaiveDate {
    let mut date = from;
    let mut remaining = n;
    while remaining > 0 {
        match date.succ_opt() {
            Some(next) => date = next,
            None => return date,
        }
        if is_business_day(date) {
            remaining -= 1;
        }
    }
    date
}

/// Counts business days strictly after `from` up to and including `to`,
/// walking day by day. Returns 0 when `to <= from`.
pub fn business_days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut count = 0;
    let mut date = from + Duration::days(1);
    while date <= to {
        if is_business_day(date) {
            count += 1;
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn advance_zero_returns_input() {
        let saturday = date(2025, 1, 11);
        assert_eq!(advance_business_days(saturday, 0), saturday);
    }

    #[test]
    fn advance_from_friday_skips_the_weekend() {
        // 2025-01-10 is a Friday.
        let friday = date(2025, 1, 10);
        assert_eq!(advance_business_days(friday, 1), date(2025, 1, 13));
    }

    #[test]
    fn advance_five_from_friday_lands_next_friday() {
        let friday = date(2025, 1, 10);
        assert_eq!(advance_business_days(friday, 5), date(2025, 1, 17));
    }

    #[test]
    fn between_same_day_is_zero() {
        let d = date(2025, 1, 15);
        assert_eq!(business_days_between(d, d), 0);
    }

    #[test]
    fn between_inverted_range_is_zero() {
        assert_eq!(business_days_between(date(2025, 1, 20), date(2025, 1, 10)), 0);
    }

    #[test]
    fn between_monday_and_friday_is_four() {
        // 2025-01-13 Monday, 2025-01-17 Friday.
        assert_eq!(
            business_days_between(date(2025, 1, 13), date(2025, 1, 17)),
            4
        );
    }

    #[test]
    fn between_skips_weekend_days() {
        // Friday to next Tuesday: Mon + Tue count, Sat/Sun do not.
        assert_eq!(
            business_days_between(date(2025, 1, 10), date(2025, 1, 14)),
            2
        );
    }
}
