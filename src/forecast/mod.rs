//! 5-day forecast ("pronóstico 5 días") parsing and storage.
//!
//! - [`scanner`] walks the report line by line and routes data rows
//! - [`accumulator`] holds the per-locality date/hour samples

pub mod accumulator;
pub mod scanner;

pub use accumulator::{ForecastCollection, HourlyForecast, LocalityForecast};
pub use scanner::{ForecastScanner, LineKind, ScanState, scan_forecast_report};
