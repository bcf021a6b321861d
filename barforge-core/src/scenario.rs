//! Serializable scenario configuration.
//!
//! A `ScenarioConfig` captures everything needed to reproduce a fixture
//! dataset: the seed, the date range, the ticker universe, the anomaly
//! probabilities, and the calendar-pinned events. `Default` reproduces the
//! canonical five-ticker 2023 scenario; any field can be overridden from a
//! TOML file.

use crate::domain::{ExDividendEvent, MarketShock, TickerSpec};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full description of one fixture-generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Master seed; a fixed seed yields a byte-identical dataset.
    pub seed: u64,

    /// First calendar day (inclusive).
    pub start_date: NaiveDate,

    /// Last calendar day (inclusive).
    pub end_date: NaiveDate,

    /// Ticker universe, in output order.
    pub tickers: Vec<TickerSpec>,

    /// Probabilities of the per-row anomalies.
    pub anomalies: AnomalyConfig,

    /// Price-path parameters.
    pub price: PriceConfig,

    /// Daily volume bounds.
    pub volume: VolumeConfig,

    /// Quarterly-report and fundamentals parameters.
    pub fundamentals: FundamentalsConfig,

    /// Ex-dividend adjustments, pinned to (ticker, date).
    pub ex_dividends: Vec<ExDividendEvent>,

    /// Market-wide shock days.
    pub shocks: Vec<MarketShock>,
}

/// Per-row anomaly probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Probability that a Saturday/Sunday still prints a row.
    pub weekend_keep_prob: f64,
    /// Probability of a trading halt on any given day.
    pub suspension_prob: f64,
    /// Probability of a limit-up day.
    pub limit_up_prob: f64,
    /// Probability of a limit-down day.
    pub limit_down_prob: f64,
}

/// Price-path parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceConfig {
    /// Price level on day zero, before noise.
    pub base: f64,
    /// Linear drift added per calendar day.
    pub drift_per_day: f64,
    /// Std-dev of the Gaussian noise on the base price.
    pub noise_std: f64,
    /// Mean of the normal-day close-to-base return.
    pub ret_mean: f64,
    /// Std-dev of the normal-day close-to-base return.
    pub ret_std: f64,
    /// Close multiplier on limit-up days (must exceed 1).
    pub limit_up_ratio: f64,
    /// Close multiplier on limit-down days (must be within (0, 1)).
    pub limit_down_ratio: f64,
}

/// Daily volume bounds (uniform draw).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub min: f64,
    pub max: f64,
}

/// Quarterly-report and fundamentals parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalsConfig {
    /// Minimum report-to-publication lag, in days (inclusive).
    pub publish_lag_min_days: i64,
    /// Maximum report-to-publication lag, in days (inclusive).
    pub publish_lag_max_days: i64,
    /// Mean of the return-on-equity draw.
    pub roe_mean: f64,
    /// Std-dev of the return-on-equity draw.
    pub roe_std: f64,
    /// Probability that ROE is left missing.
    pub missing_roe_prob: f64,
    /// Price-earnings bounds (uniform draw).
    pub pe_min: f64,
    pub pe_max: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let delist_cutoff = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid date"),
            tickers: vec![
                TickerSpec::listed("600519.SH"),
                TickerSpec::listed("300750.SZ"),
                TickerSpec::listed("601318.SH"),
                TickerSpec::listed("000001.SZ"),
                TickerSpec::delisted_after("688981.SH", delist_cutoff),
            ],
            anomalies: AnomalyConfig::default(),
            price: PriceConfig::default(),
            volume: VolumeConfig::default(),
            fundamentals: FundamentalsConfig::default(),
            ex_dividends: vec![ExDividendEvent {
                ts_code: "600519.SH".into(),
                date: NaiveDate::from_ymd_opt(2023, 7, 1).expect("valid date"),
                adjust_ratio: 0.95,
            }],
            shocks: vec![MarketShock {
                date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid date"),
                ratio: 0.7,
            }],
        }
    }
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            weekend_keep_prob: 0.3,
            suspension_prob: 0.05,
            limit_up_prob: 0.03,
            limit_down_prob: 0.03,
        }
    }
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            base: 50.0,
            drift_per_day: 0.1,
            noise_std: 2.0,
            ret_mean: 0.0005,
            ret_std: 0.02,
            limit_up_ratio: 1.1,
            limit_down_ratio: 0.9,
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            min: 1e5,
            max: 1e7,
        }
    }
}

impl Default for FundamentalsConfig {
    fn default() -> Self {
        Self {
            publish_lag_min_days: 30,
            publish_lag_max_days: 59,
            roe_mean: 0.1,
            roe_std: 0.05,
            missing_roe_prob: 0.1,
            pe_min: 10.0,
            pe_max: 50.0,
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ScenarioError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.tickers.is_empty() {
            return Err(ScenarioError::EmptyUniverse);
        }
        if self.start_date > self.end_date {
            return Err(ScenarioError::InvertedDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        for (name, value) in [
            ("weekend_keep_prob", self.anomalies.weekend_keep_prob),
            ("suspension_prob", self.anomalies.suspension_prob),
            ("limit_up_prob", self.anomalies.limit_up_prob),
            ("limit_down_prob", self.anomalies.limit_down_prob),
            ("missing_roe_prob", self.fundamentals.missing_roe_prob),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScenarioError::ProbabilityOutOfRange { name, value });
            }
        }
        if self.price.limit_up_ratio <= 1.0 {
            return Err(ScenarioError::LimitUpRatio(self.price.limit_up_ratio));
        }
        if self.price.limit_down_ratio <= 0.0 || self.price.limit_down_ratio >= 1.0 {
            return Err(ScenarioError::LimitDownRatio(self.price.limit_down_ratio));
        }
        for (name, min, max) in [
            ("volume", self.volume.min, self.volume.max),
            ("pe", self.fundamentals.pe_min, self.fundamentals.pe_max),
            (
                "publish_lag",
                self.fundamentals.publish_lag_min_days as f64,
                self.fundamentals.publish_lag_max_days as f64,
            ),
        ] {
            if min > max {
                return Err(ScenarioError::InvertedRange { name, min, max });
            }
        }
        Ok(())
    }

    /// All calendar days of the scenario, inclusive on both ends.
    pub fn calendar_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scenario has no tickers")]
    EmptyUniverse,

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("start_date {start} is after end_date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("limit_up_ratio must exceed 1.0, got {0}")]
    LimitUpRatio(f64),

    #[error("limit_down_ratio must be within (0, 1), got {0}")]
    LimitDownRatio(f64),
}
