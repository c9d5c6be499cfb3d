//! SMN Processor Library
//!
//! A Rust library for turning the bulk text feeds of Argentina's Servicio
//! Meteorológico Nacional into structured records and JSON.
//!
//! This library provides tools for:
//! - Parsing the current conditions report (`tiepre`), one `;`-delimited
//!   record per locality
//! - Scanning the 5-day forecast report (`pron5d`), whose locality blocks are
//!   only recognizable from the shape of adjacent lines
//! - Normalizing mixed units, wind phrases, sentinel values and Spanish month
//!   names
//! - Downloading and unpacking the feed archives
//! - Rendering everything as plain JSON values
//!
//! ## Usage
//!
//! ```rust
//! use smn_processor::forecast::scan_forecast_report;
//! use smn_processor::serialize::ToPlainValue;
//!
//! let report = "CORDOBA\n========\n01/ENE/2020 00Hs.  18.5  120 | 10  0.0\n";
//! let (forecasts, _stats) = scan_forecast_report(report.lines())?;
//!
//! let cordoba = forecasts.require("Cordoba")?;
//! assert_eq!(cordoba.forecast_for(1, 1, 2020)?["00"].temperature, 18.5);
//! assert!(cordoba.to_plain_value()["01-01-2020"]["00"].is_object());
//! # Ok::<(), smn_processor::SmnError>(())
//! ```

pub mod config;
pub mod constants;
pub mod current;
pub mod error;
pub mod fetch;
pub mod fields;
pub mod forecast;
pub mod models;
pub mod serialize;
pub mod units;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::SmnConfig;
pub use current::{CurrentConditionsReport, parse_current_line, parse_current_report};
pub use error::{Result, SmnError};
pub use fetch::FeedClient;
pub use forecast::{ForecastCollection, LocalityForecast, scan_forecast_report};
pub use models::{CurrentConditions, FeedKind, ForecastSample, ScanStats, Wind};
pub use serialize::{ToPlainValue, to_json_string};
