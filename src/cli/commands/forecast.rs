//! `forecast` command: 5-day forecast as JSON

use super::shared::{RunSummary, feed_client, print_json, read_input};
use crate::cli::args::{Args, ForecastArgs};
use crate::forecast::scan_forecast_report;
use crate::models::FeedKind;
use anyhow::{Context, Result};
use chrono::Datelike;
use std::time::Instant;
use tracing::debug;

pub async fn run_forecast(args: &Args, forecast_args: &ForecastArgs) -> Result<RunSummary> {
    let start_time = Instant::now();
    let feed = FeedKind::Forecast;

    let (forecasts, source) = match forecast_args.input.as_deref() {
        Some(path) => {
            let text = read_input(feed, path).await?;
            let (forecasts, stats) = scan_forecast_report(text.lines())
                .context("Failed to parse the forecast report")?;
            debug!("Scan stats: {:?}", stats);
            (forecasts, path.display().to_string())
        }
        None => {
            let client = feed_client(args)?;
            let forecasts = client
                .forecast()
                .await
                .context("Failed to fetch the forecast")?;
            (forecasts, client.config().base_url.clone())
        }
    };

    let (localities, records) = match (&forecast_args.locality, forecast_args.date) {
        (Some(locality), Some(date)) => {
            let hours = forecasts
                .require(locality)?
                .forecast_for(date.day(), date.month(), date.year())?;
            print_json(hours, args.pretty)?;
            (1, hours.len())
        }
        (Some(locality), None) => {
            let forecast = forecasts.require(locality)?;
            print_json(forecast, args.pretty)?;
            (1, forecast.sample_count())
        }
        // clap enforces --date requires --locality
        (None, _) => {
            print_json(&forecasts, args.pretty)?;
            let samples = forecasts.iter().map(|(_, f)| f.sample_count()).sum::<usize>();
            (forecasts.len(), samples)
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
