//! Quarterly-report calendar math.
//!
//! Every row carries the report date of the quarter preceding its trade
//! date, plus an `actual_publish_date` lagging it by weeks. The gap between
//! the two is what lets downstream exercises detect look-ahead bias: a
//! backtest that reads fundamentals at `report_date` is using information
//! that was not yet public.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Last day of the quarter preceding the one containing `date`.
///
/// A date in Q1 maps to December 31 of the prior year; a date in Q2 maps to
/// March 31, and so on.
pub fn preceding_quarter_end(date: NaiveDate) -> NaiveDate {
    let quarter_start_month = ((date.month() - 1) / 3) * 3 + 1;
    let quarter_start = NaiveDate::from_ymd_opt(date.year(), quarter_start_month, 1)
        .expect("first of a quarter month is always valid");
    quarter_start - Duration::days(1)
}

/// True for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn q1_dates_report_previous_december() {
        assert_eq!(preceding_quarter_end(d(2023, 1, 1)), d(2022, 12, 31));
        assert_eq!(preceding_quarter_end(d(2023, 3, 31)), d(2022, 12, 31));
    }

    #[test]
    fn q2_dates_report_march() {
        assert_eq!(preceding_quarter_end(d(2023, 4, 1)), d(2023, 3, 31));
        assert_eq!(preceding_quarter_end(d(2023, 6, 30)), d(2023, 3, 31));
    }

    #[test]
    fn q3_dates_report_june() {
        assert_eq!(preceding_quarter_end(d(2023, 7, 1)), d(2023, 6, 30));
        assert_eq!(preceding_quarter_end(d(2023, 9, 15)), d(2023, 6, 30));
    }

    #[test]
    fn q4_dates_report_september() {
        assert_eq!(preceding_quarter_end(d(2023, 10, 1)), d(2023, 9, 30));
        assert_eq!(preceding_quarter_end(d(2023, 12, 31)), d(2023, 9, 30));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(d(2023, 1, 7))); // Saturday
        assert!(is_weekend(d(2023, 1, 8))); // Sunday
        assert!(!is_weekend(d(2023, 1, 9))); // Monday
    }
}
