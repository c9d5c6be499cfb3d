//! Retrieval of SMN feed archives.
//!
//! The open data endpoint answers with a zip archive holding a single
//! ISO-8859-1 text report. [`FeedClient`] downloads and unpacks it, and
//! [`read_report_file`] does the same for a report already on disk.

use crate::config::SmnConfig;
use crate::constants::FEED_QUERY_PARAM;
use crate::current::{CurrentConditionsReport, parse_current_report};
use crate::error::{Result, SmnError};
use crate::forecast::{ForecastCollection, LocalityForecast, scan_forecast_report};
use crate::models::{CurrentConditions, FeedKind};
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Magic bytes at the start of every zip archive
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

#[derive(Debug)]
pub struct FeedClient {
    client: Client,
    config: SmnConfig,
}

impl FeedClient {
    pub fn new(config: SmnConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SmnConfig {
        &self.config
    }

    /// Download one feed and return its decoded report text
    pub async fn download(&self, feed: FeedKind) -> Result<String> {
        debug!(
            message = "requesting feed archive",
            url = %self.config.base_url,
            feed = feed.selector()
        );

        let res = self
            .client
            .get(&self.config.base_url)
            .query(&[(FEED_QUERY_PARAM, feed.selector())])
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(SmnError::UnexpectedStatus {
                status,
                url: res.url().to_string(),
            });
        }

        let bytes = res.bytes().await?;
        info!("Downloaded {} archive ({} bytes)", feed, bytes.len());
        extract_report(&bytes)
    }

    /// Current conditions for every locality
    pub async fn current_conditions(&self) -> Result<CurrentConditionsReport> {
        let text = self.download(FeedKind::CurrentConditions).await?;
        parse_current_report(text.lines())
    }

    /// Current conditions for one locality, matched case-insensitively
    pub async fn current_conditions_in(&self, locality: &str) -> Result<CurrentConditions> {
        let report = self.current_conditions().await?;
        report.require(locality).cloned()
    }

    /// 5-day forecast for every locality
    pub async fn forecast(&self) -> Result<ForecastCollection> {
        let text = self.download(FeedKind::Forecast).await?;
        let (forecasts, stats) = scan_forecast_report(text.lines())?;
        debug!("Forecast scan stats: {:?}", stats);
        Ok(forecasts)
    }

    /// 5-day forecast for one locality; "Buenos Aires" finds "BUENOS_AIRES"
    pub async fn forecast_in(&self, locality: &str) -> Result<LocalityForecast> {
        let mut forecasts = self.forecast().await?;
        forecasts
            .remove(locality)
            .ok_or_else(|| SmnError::LocalityNotFound {
                locality: locality.to_string(),
            })
    }
}

/// Unpack the first entry of a feed archive and decode it
pub fn extract_report(archive_bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;
    if archive.len() == 0 {
        return Err(SmnError::EmptyArchive);
    }

    // The entry is dropped at the end of this block on every path
    let raw = {
        let mut entry = archive.by_index(0)?;
        debug!("Reading archive entry {} ({} bytes)", entry.name(), entry.size());
        let mut raw = Vec::new();
        entry.read_to_end(&mut raw)?;
        raw
    };

    Ok(decode_latin1(&raw))
}

/// Decode ISO-8859-1 text; every byte maps to the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Load a report saved on disk, either as the downloaded zip or as plain text
pub async fn read_report_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    if bytes.starts_with(ZIP_MAGIC) {
        extract_report(&bytes)
    } else {
        Ok(decode_latin1(&bytes))
    }
}
