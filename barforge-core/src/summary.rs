//! Anomaly statistics over a finished dataset.

use crate::domain::DailyRow;
use crate::fundamentals::is_weekend;
use crate::scenario::ScenarioConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Counts and rates of the anomalies embedded in a generated dataset.
///
/// Computed from the rows themselves, not from the configured
/// probabilities, so the summary reflects what actually landed in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub ticker_count: usize,
    pub suspended_rows: usize,
    pub suspended_rate: f64,
    pub limit_up_rows: usize,
    pub limit_down_rows: usize,
    pub missing_roe_rows: usize,
    pub missing_roe_rate: f64,
    pub weekend_rows: usize,
    pub earliest_publish_date: Option<NaiveDate>,
    pub delistings: Vec<DelistingNote>,
}

/// Last date a delisting ticker actually printed a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelistingNote {
    pub symbol: String,
    pub last_row_date: Option<NaiveDate>,
}

impl DatasetSummary {
    pub fn from_rows(rows: &[DailyRow], config: &ScenarioConfig) -> Self {
        let row_count = rows.len();
        let suspended_rows = rows.iter().filter(|r| r.is_suspended).count();
        let limit_up_rows = rows.iter().filter(|r| r.is_limit_up).count();
        let limit_down_rows = rows.iter().filter(|r| r.is_limit_down).count();
        let missing_roe_rows = rows.iter().filter(|r| r.roe.is_none()).count();
        let weekend_rows = rows.iter().filter(|r| is_weekend(r.trade_date)).count();
        let earliest_publish_date = rows.iter().map(|r| r.actual_publish_date).min();

        let rate = |n: usize| {
            if row_count == 0 {
                0.0
            } else {
                n as f64 / row_count as f64
            }
        };

        let delistings = config
            .tickers
            .iter()
            .filter(|t| t.delist_after.is_some())
            .map(|t| DelistingNote {
                symbol: t.symbol.clone(),
                last_row_date: rows
                    .iter()
                    .filter(|r| r.ts_code == t.symbol)
                    .map(|r| r.trade_date)
                    .max(),
            })
            .collect();

        Self {
            row_count,
            ticker_count: config.tickers.len(),
            suspended_rows,
            suspended_rate: rate(suspended_rows),
            limit_up_rows,
            limit_down_rows,
            missing_roe_rows,
            missing_roe_rate: rate(missing_roe_rows),
            weekend_rows,
            earliest_publish_date,
            delistings,
        }
    }
}
