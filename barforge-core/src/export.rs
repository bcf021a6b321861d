//! Dataset export — CSV fixture and JSON manifest.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::DailyRow;
use crate::scenario::ScenarioConfig;
use crate::summary::DatasetSummary;

/// Column order of the fixture file. Downstream exercises key on these
/// names; the order is part of the format.
pub const CSV_HEADER: [&str; 16] = [
    "ts_code",
    "trade_date",
    "open",
    "high",
    "low",
    "close",
    "pre_close",
    "vol",
    "amount",
    "report_date",
    "actual_publish_date",
    "roe",
    "pe",
    "is_suspended",
    "is_limit_up",
    "is_limit_down",
];

// ─── CSV export ─────────────────────────────────────────────────────

/// Render the dataset as CSV with the 16-column fixture header.
///
/// Missing prices and missing ROE become empty cells; boolean flags are
/// written as 1/0.
pub fn export_csv(rows: &[DailyRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(record_fields(row))?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write the dataset CSV to `path`.
pub fn write_dataset(path: &Path, rows: &[DailyRow]) -> Result<()> {
    let csv = export_csv(rows)?;
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write dataset CSV {}", path.display()))?;
    Ok(())
}

fn record_fields(row: &DailyRow) -> [String; 16] {
    [
        row.ts_code.clone(),
        row.trade_date.to_string(),
        opt_price(row.open),
        opt_price(row.high),
        opt_price(row.low),
        opt_price(row.close),
        format!("{:.4}", row.pre_close),
        format!("{:.2}", row.vol),
        format!("{:.2}", row.amount),
        row.report_date.to_string(),
        row.actual_publish_date.to_string(),
        row.roe.map(|v| format!("{v:.4}")).unwrap_or_default(),
        format!("{:.4}", row.pe),
        flag(row.is_suspended).into(),
        flag(row.is_limit_up).into(),
        flag(row.is_limit_down).into(),
    ]
}

fn opt_price(value: Option<f64>) -> String {
    value.map(|p| format!("{p:.4}")).unwrap_or_default()
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

// ─── Manifest ───────────────────────────────────────────────────────

/// Sidecar manifest: the scenario that produced the file plus the anomaly
/// statistics observed in it.
#[derive(Debug, serde::Serialize)]
pub struct Manifest<'a> {
    pub config: &'a ScenarioConfig,
    pub summary: &'a DatasetSummary,
}

/// Write a pretty-JSON manifest next to the dataset.
pub fn write_manifest(
    path: &Path,
    config: &ScenarioConfig,
    summary: &DatasetSummary,
) -> Result<()> {
    let manifest = Manifest { config, summary };
    let json =
        serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write manifest {}", path.display()))?;
    Ok(())
}
