//! Ticker membership of a scenario.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ticker in the generated universe.
///
/// `delist_after` is the last date on which the ticker may still print a
/// row; later dates are skipped entirely, so the ticker simply disappears
/// from the dataset mid-year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSpec {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delist_after: Option<NaiveDate>,
}

impl TickerSpec {
    pub fn listed(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            delist_after: None,
        }
    }

    pub fn delisted_after(symbol: impl Into<String>, last_date: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            delist_after: Some(last_date),
        }
    }

    /// True if the ticker still trades on `date`.
    pub fn is_listed_on(&self, date: NaiveDate) -> bool {
        match self.delist_after {
            Some(cutoff) => date <= cutoff,
            None => true,
        }
    }
}
