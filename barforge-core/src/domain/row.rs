//! DailyRow — one observation of the fixture dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily observation for one ticker, keyed by `(ts_code, trade_date)`.
///
/// Price fields are `None` on suspended days; `pre_close` carries the day's
/// base price even then, so downstream cleaning exercises have an anchor to
/// work from. The limit flags record the raw probability draws, not the
/// realized price shape — both can be set on the same row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRow {
    pub ts_code: String,
    pub trade_date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub pre_close: f64,
    pub vol: f64,
    pub amount: f64,
    pub report_date: NaiveDate,
    pub actual_publish_date: NaiveDate,
    pub roe: Option<f64>,
    pub pe: f64,
    pub is_suspended: bool,
    pub is_limit_up: bool,
    pub is_limit_down: bool,
}

impl DailyRow {
    /// Returns true if all four OHLC fields are present.
    pub fn has_prices(&self) -> bool {
        self.open.is_some() && self.high.is_some() && self.low.is_some() && self.close.is_some()
    }

    /// Basic OHLC sanity check: high >= open/close >= low, prices positive.
    ///
    /// Suspended rows (no prices) are not sane by this definition; callers
    /// filter on `has_prices` first when that distinction matters.
    pub fn is_sane(&self) -> bool {
        let (Some(open), Some(high), Some(low), Some(close)) =
            (self.open, self.high, self.low, self.close)
        else {
            return false;
        };
        high >= low
            && high >= open
            && high >= close
            && low <= open
            && low <= close
            && open > 0.0
            && close > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> DailyRow {
        DailyRow {
            ts_code: "600519.SH".into(),
            trade_date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
            open: Some(52.0),
            high: Some(54.5),
            low: Some(51.2),
            close: Some(53.8),
            pre_close: 52.6,
            vol: 2_500_000.0,
            amount: 2_500_000.0 * 53.8,
            report_date: NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
            actual_publish_date: NaiveDate::from_ymd_opt(2023, 2, 10).unwrap(),
            roe: Some(0.11),
            pe: 23.4,
            is_suspended: false,
            is_limit_up: false,
            is_limit_down: false,
        }
    }

    #[test]
    fn row_is_sane() {
        assert!(sample_row().is_sane());
        assert!(sample_row().has_prices());
    }

    #[test]
    fn suspended_row_is_not_sane() {
        let mut row = sample_row();
        row.open = None;
        row.high = None;
        row.low = None;
        row.close = None;
        row.is_suspended = true;
        assert!(!row.has_prices());
        assert!(!row.is_sane());
    }

    #[test]
    fn detects_inverted_high_low() {
        let mut row = sample_row();
        row.high = Some(50.0); // below low
        assert!(!row.is_sane());
    }

    #[test]
    fn serialization_roundtrip() {
        let row = sample_row();
        let json = serde_json::to_string(&row).unwrap();
        let deser: DailyRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deser);
    }
}
