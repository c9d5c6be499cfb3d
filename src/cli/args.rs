//! Command-line argument definitions for the SMN processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::SmnConfig;
use crate::constants::FORECAST_DATE_KEY_FORMAT;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the SMN feed processor
///
/// Downloads the current conditions or 5-day forecast feed published by
/// Argentina's Servicio Meteorológico Nacional and prints it as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smn-processor",
    version,
    about = "Fetch SMN current conditions and 5-day forecasts as JSON",
    long_about = "Downloads the bulk text feeds published by Argentina's Servicio Meteorológico \
                  Nacional, parses them into per-locality records and prints them as JSON. \
                  Reports saved on disk (zipped or plain text) can be parsed with --input."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and skip the summary
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Pretty-print JSON output (tab indented)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Override the SMN download endpoint
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Current conditions for every locality, or a single one
    Current(CurrentArgs),
    /// 5-day forecast for every locality, or a single one
    Forecast(ForecastArgs),
}

/// Arguments for the current conditions command
#[derive(Debug, Clone, Parser)]
pub struct CurrentArgs {
    /// Only print this locality (case-insensitive, e.g. "Buenos Aires")
    #[arg(short = 'l', long = "locality", value_name = "NAME")]
    pub locality: Option<String>,

    /// Parse a saved report instead of downloading it
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Arguments for the forecast command
#[derive(Debug, Clone, Parser)]
pub struct ForecastArgs {
    /// Only print this locality ("Buenos Aires" matches BUENOS_AIRES)
    #[arg(short = 'l', long = "locality", value_name = "NAME")]
    pub locality: Option<String>,

    /// Only print this date (DD-MM-YYYY); requires --locality
    #[arg(
        short = 'd',
        long = "date",
        value_name = "DD-MM-YYYY",
        value_parser = parse_forecast_date_arg,
        requires = "locality"
    )]
    pub date: Option<NaiveDate>,

    /// Parse a saved report instead of downloading it
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Parse a `DD-MM-YYYY` date argument
fn parse_forecast_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), FORECAST_DATE_KEY_FORMAT)
        .map_err(|e| format!("expected DD-MM-YYYY ({})", e))
}

impl Args {
    /// Get the log level implied by --verbose / --quiet
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the colored summary should be printed
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }

    /// Default configuration with command-line overrides applied
    pub fn to_config(&self) -> SmnConfig {
        let mut config = SmnConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout_secs {
            config = config.with_timeout_secs(timeout);
        }
        config
    }
}
