//! Calendar-pinned price events injected into a scenario.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ex-dividend adjustment: on `date`, the named ticker's base price is
/// multiplied by `adjust_ratio` before the day's bar is shaped, producing
/// the characteristic downward jump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExDividendEvent {
    pub ts_code: String,
    pub date: NaiveDate,
    pub adjust_ratio: f64,
}

/// Market-wide shock: on `date`, every ticker's base price is multiplied by
/// `ratio`. Suspended tickers keep their unshocked base, matching how the
/// source data behaves on halt days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShock {
    pub date: NaiveDate,
    pub ratio: f64,
}

impl ExDividendEvent {
    /// True if this event fires for `symbol` on `date`.
    pub fn applies(&self, symbol: &str, date: NaiveDate) -> bool {
        self.ts_code == symbol && self.date == date
    }
}

impl MarketShock {
    pub fn applies(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
