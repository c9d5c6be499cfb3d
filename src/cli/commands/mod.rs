//! Command implementations for the SMN processor CLI
//!
//! Each subcommand lives in its own module:
//! - `current`: current conditions report
//! - `forecast`: 5-day forecast report

pub mod current;
pub mod forecast;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use anyhow::{Result, bail};

/// Main command runner: sets up logging, dispatches, prints the summary
pub async fn run(args: Args) -> Result<RunSummary> {
    shared::setup_logging(&args)?;

    let summary = match &args.command {
        Some(Commands::Current(current_args)) => {
            current::run_current(&args, current_args).await?
        }
        Some(Commands::Forecast(forecast_args)) => {
            forecast::run_forecast(&args, forecast_args).await?
        }
        None => bail!("No command given; try `smn-processor --help`"),
    };

    if args.show_summary() {
        summary.report();
    }
    Ok(summary)
}
