//! BarForge Core — synthetic daily-equities fixtures with embedded
//! data-quality anomalies.
//!
//! This crate contains everything behind the CLI:
//! - Domain types (daily rows, ticker specs, calendar-pinned events)
//! - Scenario configuration with TOML loading and validation
//! - Deterministic seeded RNG with per-ticker sub-seeds
//! - The per-row generation rule chain (halts, limit moves, delisting,
//!   ex-dividend jumps, market shocks, weekend noise, delayed fundamentals)
//! - Anomaly summary statistics
//! - CSV and manifest export

pub mod domain;
pub mod export;
pub mod fundamentals;
pub mod generate;
pub mod rng;
pub mod sampling;
pub mod scenario;
pub mod summary;
