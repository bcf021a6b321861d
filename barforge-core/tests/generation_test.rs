//! Post-conditions on the generated dataset.
//!
//! Each test checks a direct property of the finished table: determinism,
//! the delisting cutoff, suspended-row shape, limit-day shape, the pinned
//! ex-dividend and shock adjustments, and the anomaly rates.

use barforge_core::domain::DailyRow;
use barforge_core::export::export_csv;
use barforge_core::fundamentals::{is_weekend, preceding_quarter_end};
use barforge_core::generate::DatasetGenerator;
use barforge_core::scenario::ScenarioConfig;
use barforge_core::summary::DatasetSummary;
use chrono::{Duration, NaiveDate};

fn default_rows() -> Vec<DailyRow> {
    DatasetGenerator::new(ScenarioConfig::default())
        .unwrap()
        .generate()
}

/// Scenario with all randomness stripped from the price path, so the base
/// price is exactly `base + offset * drift` and event multipliers can be
/// checked to the digit.
fn deterministic_price_scenario() -> ScenarioConfig {
    let mut config = ScenarioConfig::default();
    config.price.noise_std = 0.0;
    config.anomalies.weekend_keep_prob = 1.0;
    config.anomalies.suspension_prob = 0.0;
    config.anomalies.limit_up_prob = 0.0;
    config.anomalies.limit_down_prob = 0.0;
    config
}

#[test]
fn fixed_seed_is_deterministic() {
    assert_eq!(default_rows(), default_rows());
}

#[test]
fn delisted_ticker_has_no_rows_after_cutoff() {
    let cutoff = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    let rows = default_rows();

    let last = rows
        .iter()
        .filter(|r| r.ts_code == "688981.SH")
        .map(|r| r.trade_date)
        .max()
        .expect("delisting ticker must have rows before the cutoff");
    assert!(last <= cutoff);

    // The other tickers keep printing into December.
    let survivor_last = rows
        .iter()
        .filter(|r| r.ts_code == "600519.SH")
        .map(|r| r.trade_date)
        .max()
        .unwrap();
    assert!(survivor_last > cutoff);
}

#[test]
fn suspended_rows_have_no_prices_and_zero_volume() {
    let rows = default_rows();
    let suspended: Vec<_> = rows.iter().filter(|r| r.is_suspended).collect();
    assert!(!suspended.is_empty());

    for row in suspended {
        assert!(!row.has_prices());
        assert_eq!(row.vol, 0.0);
        assert_eq!(row.amount, 0.0);
    }
}

#[test]
fn limit_up_rows_pin_open_and_high_to_close() {
    let rows = default_rows();
    let limit_up: Vec<_> = rows
        .iter()
        .filter(|r| r.is_limit_up && !r.is_suspended)
        .collect();
    assert!(!limit_up.is_empty());

    for row in limit_up {
        let close = row.close.unwrap();
        assert_eq!(row.open.unwrap(), close);
        assert_eq!(row.high.unwrap(), close);
        assert!(row.low.unwrap() < close);
    }
}

#[test]
fn limit_down_rows_pin_open_and_low_to_close() {
    let rows = default_rows();
    let limit_down: Vec<_> = rows
        .iter()
        .filter(|r| r.is_limit_down && !r.is_limit_up && !r.is_suspended)
        .collect();
    assert!(!limit_down.is_empty());

    for row in limit_down {
        let close = row.close.unwrap();
        assert_eq!(row.open.unwrap(), close);
        assert_eq!(row.low.unwrap(), close);
        assert!(row.high.unwrap() > close);
    }
}

#[test]
fn ex_dividend_discounts_base_price_on_its_date() {
    let config = deterministic_price_scenario();
    let event = config.ex_dividends[0].clone();
    let offset = (event.date - config.start_date).num_days() as f64;
    let unadjusted = config.price.base + offset * config.price.drift_per_day;

    let rows = DatasetGenerator::new(config).unwrap().generate();

    let row = rows
        .iter()
        .find(|r| r.ts_code == event.ts_code && r.trade_date == event.date)
        .expect("ex-dividend day must print a row");
    assert!((row.pre_close - unadjusted * event.adjust_ratio).abs() < 1e-9);

    // A ticker without the dividend keeps the unadjusted base that day.
    let other = rows
        .iter()
        .find(|r| r.ts_code == "300750.SZ" && r.trade_date == event.date)
        .unwrap();
    assert!((other.pre_close - unadjusted).abs() < 1e-9);
}

#[test]
fn shock_day_discounts_every_ticker_present() {
    let config = deterministic_price_scenario();
    let shock = config.shocks[0].clone();
    let offset = (shock.date - config.start_date).num_days() as f64;
    let unadjusted = config.price.base + offset * config.price.drift_per_day;

    let rows = DatasetGenerator::new(config).unwrap().generate();
    let on_shock_day: Vec<_> = rows.iter().filter(|r| r.trade_date == shock.date).collect();

    // The delisting ticker is gone by October; the other four remain.
    assert_eq!(on_shock_day.len(), 4);
    for row in on_shock_day {
        assert!((row.pre_close - unadjusted * shock.ratio).abs() < 1e-9);
    }
}

#[test]
fn missing_roe_rate_is_near_configured_probability() {
    let rows = default_rows();
    let summary = DatasetSummary::from_rows(&rows, &ScenarioConfig::default());
    assert!(
        (summary.missing_roe_rate - 0.1).abs() < 0.03,
        "missing ROE rate {}",
        summary.missing_roe_rate
    );
}

#[test]
fn suspension_rate_is_near_configured_probability() {
    let rows = default_rows();
    let summary = DatasetSummary::from_rows(&rows, &ScenarioConfig::default());
    assert!(
        (summary.suspended_rate - 0.05).abs() < 0.02,
        "suspension rate {}",
        summary.suspended_rate
    );
}

#[test]
fn weekend_rows_exist_but_are_thinned() {
    let rows = default_rows();
    let weekend = rows.iter().filter(|r| is_weekend(r.trade_date)).count();
    assert!(weekend > 0, "some weekend noise must survive");

    // At keep-probability 0.3 the weekend share must sit well below the
    // 2-in-7 calendar share.
    let share = weekend as f64 / rows.len() as f64;
    assert!(share < 2.0 / 7.0 * 0.7, "weekend share {share}");
}

#[test]
fn publication_always_lags_the_report() {
    let rows = default_rows();
    for row in &rows {
        assert_eq!(row.report_date, preceding_quarter_end(row.trade_date));
        let lag = row.actual_publish_date - row.report_date;
        assert!(lag >= Duration::days(30) && lag <= Duration::days(59));
    }
}

#[test]
fn amount_is_volume_times_close() {
    let rows = default_rows();
    for row in rows.iter().filter(|r| !r.is_suspended) {
        let expected = row.vol * row.close.unwrap();
        assert!((row.amount - expected).abs() < 1e-6);
    }
}

#[test]
fn csv_has_one_line_per_row_plus_header() {
    let rows = default_rows();
    let csv = export_csv(&rows).unwrap();
    assert_eq!(csv.lines().count(), rows.len() + 1);
    assert!(csv.lines().next().unwrap().starts_with("ts_code,trade_date,"));
}
