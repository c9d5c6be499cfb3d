//! Shared utilities for the CLI commands
//!
//! Logging setup, report loading and the end-of-run summary used by both
//! the current conditions and forecast commands.

use crate::cli::args::Args;
use crate::fetch::{FeedClient, read_report_file};
use crate::models::FeedKind;
use crate::serialize::{ToPlainValue, to_json_string};
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// What a command run produced, for the summary line
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub feed: FeedKind,
    pub source: String,
    pub localities: usize,
    pub records: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Print a one-line summary to stderr so stdout stays pure JSON
    pub fn report(&self) {
        eprintln!(
            "{} {} from {}: {} localities, {} records in {}",
            "Parsed".bright_green().bold(),
            self.feed.to_string().bright_cyan(),
            self.source.bright_white(),
            self.localities.to_string().bright_white().bold(),
            self.records.to_string().bright_white().bold(),
            format!("{:.2?}", self.elapsed).bright_black()
        );
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("smn_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build a feed client from the command-line configuration
pub fn feed_client(args: &Args) -> Result<FeedClient> {
    let client = FeedClient::new(args.to_config()).context("Invalid feed configuration")?;
    info!("Fetching from {}", client.config().base_url);
    Ok(client)
}

/// Read a report saved on disk instead of downloading it
pub async fn read_input(feed: FeedKind, path: &Path) -> Result<String> {
    info!("Reading {} report from {}", feed, path.display());
    read_report_file(path)
        .await
        .with_context(|| format!("Failed to read report file {}", path.display()))
}

/// Print an entity as JSON on stdout
pub fn print_json<T: ToPlainValue + ?Sized>(entity: &T, pretty: bool) -> Result<()> {
    let json = to_json_string(entity, pretty).context("Failed to render JSON output")?;
    println!("{}", json);
    Ok(())
}
