//! Dataset generation — the per-row rule chain.
//!
//! One pass per ticker, one candidate row per calendar day. Each day runs
//! the same sequence: weekend thinning, base-price walk, anomaly draws,
//! delisting cutoff, price shaping, volume, fundamentals. Draw order is
//! fixed so that a given (seed, scenario) pair always produces the same
//! dataset.

use crate::domain::{DailyRow, TickerSpec};
use crate::fundamentals::{is_weekend, preceding_quarter_end};
use crate::rng::SeedHierarchy;
use crate::sampling::ValueDist;
use crate::scenario::{ScenarioConfig, ScenarioError};
use chrono::Duration;
use rand::rngs::StdRng;
use rand::Rng;

/// Close/high/low shape multipliers for the three day kinds.
///
/// Limit days pin three of the four prices to the clamped close and leave a
/// token intraday range on the fourth; normal days spread high/low around
/// both close and base so the open can land anywhere in between.
const LIMIT_UP_LOW_RATIO: f64 = 0.99;
const LIMIT_DOWN_HIGH_RATIO: f64 = 1.01;
const NORMAL_HIGH_OF_CLOSE: f64 = 1.02;
const NORMAL_HIGH_OF_BASE: f64 = 1.03;
const NORMAL_LOW_OF_CLOSE: f64 = 0.98;
const NORMAL_LOW_OF_BASE: f64 = 0.97;

/// Generates fixture datasets from a validated scenario.
pub struct DatasetGenerator {
    config: ScenarioConfig,
    seeds: SeedHierarchy,
}

impl DatasetGenerator {
    /// Validates the scenario and builds a generator for it.
    pub fn new(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        config.validate()?;
        let seeds = SeedHierarchy::new(config.seed);
        Ok(Self { config, seeds })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Generate the full dataset, ordered by ticker (config order) then date.
    pub fn generate(&self) -> Vec<DailyRow> {
        let mut rows = Vec::new();
        for ticker in &self.config.tickers {
            let mut rng = self.seeds.rng_for(&ticker.symbol);
            self.generate_ticker(ticker, &mut rng, &mut rows);
        }
        rows
    }

    fn generate_ticker(&self, ticker: &TickerSpec, rng: &mut StdRng, rows: &mut Vec<DailyRow>) {
        let anomalies = &self.config.anomalies;
        let price = &self.config.price;
        let fundamentals = &self.config.fundamentals;

        let base_noise = ValueDist::Normal {
            mean: 0.0,
            std_dev: price.noise_std,
        };
        let daily_ret = ValueDist::Normal {
            mean: price.ret_mean,
            std_dev: price.ret_std,
        };
        let volume = ValueDist::Uniform {
            min: self.config.volume.min,
            max: self.config.volume.max,
        };
        let roe_dist = ValueDist::Normal {
            mean: fundamentals.roe_mean,
            std_dev: fundamentals.roe_std,
        };
        let pe_dist = ValueDist::Uniform {
            min: fundamentals.pe_min,
            max: fundamentals.pe_max,
        };

        for date in self.config.calendar_days() {
            // Weekend thinning: most Sat/Sun days are dropped, a few survive
            // as non-trading-day noise.
            if is_weekend(date) && rng.gen::<f64>() >= anomalies.weekend_keep_prob {
                continue;
            }

            let day_offset = (date - self.config.start_date).num_days() as f64;
            let mut base = price.base + day_offset * price.drift_per_day + base_noise.sample(rng);

            let is_suspended = rng.gen::<f64>() < anomalies.suspension_prob;
            let is_limit_up = rng.gen::<f64>() < anomalies.limit_up_prob;
            let is_limit_down = rng.gen::<f64>() < anomalies.limit_down_prob;

            // The draws above stay in the stream even for skipped dates, so
            // the ticker's surviving rows do not shift when the cutoff moves.
            if !ticker.is_listed_on(date) {
                continue;
            }

            let (open, high, low, close, vol, amount) = if is_suspended {
                (None, None, None, None, 0.0, 0.0)
            } else {
                for ev in &self.config.ex_dividends {
                    if ev.applies(&ticker.symbol, date) {
                        base *= ev.adjust_ratio;
                    }
                }
                for shock in &self.config.shocks {
                    if shock.applies(date) {
                        base *= shock.ratio;
                    }
                }

                let (open, high, low, close) = if is_limit_up {
                    let close = base * price.limit_up_ratio;
                    (close, close, close * LIMIT_UP_LOW_RATIO, close)
                } else if is_limit_down {
                    let close = base * price.limit_down_ratio;
                    (close, close * LIMIT_DOWN_HIGH_RATIO, close, close)
                } else {
                    let close = base * (1.0 + daily_ret.sample(rng));
                    let high = (close * NORMAL_HIGH_OF_CLOSE).max(base * NORMAL_HIGH_OF_BASE);
                    let low = (close * NORMAL_LOW_OF_CLOSE).min(base * NORMAL_LOW_OF_BASE);
                    let open = ValueDist::Uniform { min: low, max: high }.sample(rng);
                    (open, high, low, close)
                };

                let vol = volume.sample(rng);
                (Some(open), Some(high), Some(low), Some(close), vol, vol * close)
            };

            let report_date = preceding_quarter_end(date);
            let lag = rng.gen_range(
                fundamentals.publish_lag_min_days..=fundamentals.publish_lag_max_days,
            );
            let actual_publish_date = report_date + Duration::days(lag);

            // Missing-draw first; the ROE value itself is only drawn for
            // rows that keep it.
            let roe = if rng.gen::<f64>() < fundamentals.missing_roe_prob {
                None
            } else {
                Some(roe_dist.sample(rng))
            };
            let pe = pe_dist.sample(rng);

            rows.push(DailyRow {
                ts_code: ticker.symbol.clone(),
                trade_date: date,
                open,
                high,
                low,
                close,
                pre_close: base,
                vol,
                amount,
                report_date,
                actual_publish_date,
                roe,
                pe,
                is_suspended,
                is_limit_up,
                is_limit_down,
            });
        }
    }
}
