//! BarForge CLI — generate fixture datasets for data-cleaning and
//! backtesting exercises.
//!
//! A bare `barforge` run writes the canonical five-ticker 2023 dataset to
//! `quant_interview_data.csv` in the working directory and prints a summary
//! of the injected anomalies. Flags override the scenario file by file,
//! seed, date range, and output paths.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::{Path, PathBuf};

use barforge_core::export::{write_dataset, write_manifest};
use barforge_core::generate::DatasetGenerator;
use barforge_core::scenario::ScenarioConfig;
use barforge_core::summary::DatasetSummary;

#[derive(Parser)]
#[command(
    name = "barforge",
    about = "BarForge — synthetic daily-equities fixtures with embedded data-quality anomalies"
)]
struct Cli {
    /// Path to a TOML scenario file. Defaults to the built-in scenario.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Master seed override.
    #[arg(long)]
    seed: Option<u64>,

    /// Start date override (YYYY-MM-DD).
    #[arg(long)]
    start: Option<String>,

    /// End date override (YYYY-MM-DD).
    #[arg(long)]
    end: Option<String>,

    /// Output CSV path.
    #[arg(long, default_value = "quant_interview_data.csv")]
    out: PathBuf,

    /// Also write a JSON manifest (scenario + observed anomaly stats).
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Suppress the summary block.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_generate(&cli)
}

fn run_generate(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ScenarioConfig::from_file(path)?,
        None => ScenarioConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(start) = cli
        .start
        .as_deref()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()?
    {
        config.start_date = start;
    }
    if let Some(end) = cli
        .end
        .as_deref()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()?
    {
        config.end_date = end;
    }

    let generator = DatasetGenerator::new(config)?;
    let rows = generator.generate();
    let summary = DatasetSummary::from_rows(&rows, generator.config());

    write_dataset(&cli.out, &rows)?;
    if let Some(manifest_path) = &cli.manifest {
        write_manifest(manifest_path, generator.config(), &summary)?;
    }

    if !cli.quiet {
        print_summary(&summary, generator.config(), &cli.out);
    }

    Ok(())
}

fn print_summary(summary: &DatasetSummary, config: &ScenarioConfig, out: &Path) {
    println!();
    println!("=== Fixture Dataset ===");
    println!("Rows:           {}", summary.row_count);
    println!("Tickers:        {}", summary.ticker_count);
    println!(
        "Period:         {} to {}",
        config.start_date, config.end_date
    );
    println!("Seed:           {}", config.seed);
    println!("Output:         {}", out.display());
    println!();
    println!("--- Injected anomalies ---");
    println!(
        "Suspended:      {} rows ({:.1}%)",
        summary.suspended_rows,
        summary.suspended_rate * 100.0
    );
    println!("Limit-up:       {} rows", summary.limit_up_rows);
    println!("Limit-down:     {} rows", summary.limit_down_rows);
    println!(
        "Missing ROE:    {} rows ({:.1}%)",
        summary.missing_roe_rows,
        summary.missing_roe_rate * 100.0
    );
    println!("Weekend rows:   {}", summary.weekend_rows);
    if let Some(earliest) = summary.earliest_publish_date {
        println!("First publish:  {earliest}");
    }
    for note in &summary.delistings {
        match note.last_row_date {
            Some(last) => println!("Delisted:       {} (last row {last})", note.symbol),
            None => println!("Delisted:       {} (no rows)", note.symbol),
        }
    }
    for ev in &config.ex_dividends {
        println!(
            "Ex-dividend:    {} on {} (x{:.2})",
            ev.ts_code, ev.date, ev.adjust_ratio
        );
    }
    for shock in &config.shocks {
        println!("Shock day:      {} (x{:.2})", shock.date, shock.ratio);
    }
    println!();
}
