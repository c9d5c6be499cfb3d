//! `current` command: current conditions as JSON

use super::shared::{RunSummary, feed_client, print_json, read_input};
use crate::cli::args::{Args, CurrentArgs};
use crate::current::parse_current_report;
use crate::models::FeedKind;
use anyhow::{Context, Result};
use std::time::Instant;

pub async fn run_current(args: &Args, current_args: &CurrentArgs) -> Result<RunSummary> {
    let start_time = Instant::now();
    let feed = FeedKind::CurrentConditions;

    let (report, source) = match current_args.input.as_deref() {
        Some(path) => {
            let text = read_input(feed, path).await?;
            let report = parse_current_report(text.lines())
                .context("Failed to parse the current conditions report")?;
            (report, path.display().to_string())
        }
        None => {
            let client = feed_client(args)?;
            let report = client
                .current_conditions()
                .await
                .context("Failed to fetch current conditions")?;
            (report, client.config().base_url.clone())
        }
    };

    let (localities, records) = match &current_args.locality {
        Some(locality) => {
            let conditions = report.require(locality)?;
            print_json(conditions, args.pretty)?;
            (1, 1)
        }
        None => {
            print_json(&report, args.pretty)?;
            (report.len(), report.len())
        }
    };

    Ok(RunSummary {
        feed,
        source,
        localities,
        records,
        elapsed: start_time.elapsed(),
    })
}
