//! Forecast report scanning.
//!
//! The 5-day forecast report has no record delimiters. A locality block
//! starts with the locality name followed by a rule of `=` characters, and
//! every line starting with a digit is a data row:
//!
//! ```text
//! AZUL
//! ================================================================
//!    FECHA *             TEMPERATURA     VIENTO         PRECIPITACION
//!                           (ºC)    dir(gr) |int(km/h)   (mm)
//! ================================================================
//!   31/DIC/2019 00Hs.        23.4       102 |   9         0.4
//! ```
//!
//! Only the previous line is needed to classify the current one, so the scan
//! is driven by a small [`ScanState`].

use super::accumulator::ForecastCollection;
use crate::constants::{FORECAST_HEADER_RULE, FORECAST_ROW_TOKENS, FORECAST_WIND_SEPARATOR};
use crate::error::{Result, SmnError};
use crate::models::ScanStats;
use tracing::{debug, warn};

/// How a single report line is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Rule under a locality name; carries the new active locality
    Header(String),
    /// Forecast data row for the active locality
    DataRow,
    Ignored,
}

/// What the scanner remembers between lines
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub previous_line: String,
    pub previous_leading: Option<char>,
    pub active_locality: Option<String>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `line` given the state left by the previous line.
    ///
    /// Header detection wins over data-row detection.
    pub fn classify(&self, line: &str) -> LineKind {
        match leading_char(line) {
            Some(FORECAST_HEADER_RULE)
                if self.previous_leading.is_some_and(char::is_alphabetic) =>
            {
                LineKind::Header(self.previous_line.trim().to_string())
            }
            Some(c) if c.is_ascii_digit() => LineKind::DataRow,
            _ => LineKind::Ignored,
        }
    }

    /// Classify `line` and move the state past it
    pub fn advance(&mut self, line: &str) -> LineKind {
        let kind = self.classify(line);
        if let LineKind::Header(locality) = &kind {
            self.active_locality = Some(locality.clone());
        }
        self.previous_line = line.to_string();
        self.previous_leading = leading_char(line);
        kind
    }
}

/// First non-whitespace character of a line
pub fn leading_char(line: &str) -> Option<char> {
    line.chars().find(|c| !c.is_whitespace())
}

/// Split a data row into date, hour, temperature, wind direction, wind speed
/// and precipitation, dropping the `|` between the two wind values
pub fn split_forecast_row(line: &str) -> Result<[&str; FORECAST_ROW_TOKENS]> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();

    let separator = tokens
        .iter()
        .position(|token| *token == FORECAST_WIND_SEPARATOR)
        .ok_or_else(|| {
            SmnError::malformed("forecast row", line.trim(), "missing wind separator '|'")
        })?;
    tokens.remove(separator);

    let found = tokens.len();
    tokens.try_into().map_err(|_| {
        SmnError::malformed(
            "forecast row",
            line.trim(),
            format!("expected {} values, found {}", FORECAST_ROW_TOKENS, found),
        )
    })
}

/// Incremental forecast report scanner
#[derive(Debug, Default)]
pub struct ForecastScanner {
    state: ScanState,
    forecasts: ForecastCollection,
    stats: ScanStats,
}

impl ForecastScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next report line
    pub fn process_line(&mut self, line: &str) -> Result<LineKind> {
        self.stats.lines_read += 1;
        let line_number = self.stats.lines_read;

        let kind = self.state.advance(line);
        match &kind {
            LineKind::Header(locality) => {
                debug!("Line {}: forecast block for {}", line_number, locality);
                self.stats.headers_found += 1;
            }
            LineKind::DataRow => {
                let locality = self.state.active_locality.as_deref().ok_or_else(|| {
                    SmnError::structure(line_number, "forecast row before any locality header")
                })?;

                let [date, hour, temperature, direction, speed, precipitation] =
                    split_forecast_row(line).inspect_err(|e| {
                        warn!("Rejected forecast line {}: {}", line_number, e);
                    })?;

                self.forecasts
                    .locality_mut(locality)
                    .add_sample(date, hour, temperature, direction, speed, precipitation)
                    .inspect_err(|e| {
                        warn!("Rejected forecast line {}: {}", line_number, e);
                    })?;
                self.stats.data_rows += 1;
            }
            LineKind::Ignored => self.stats.lines_ignored += 1,
        }

        Ok(kind)
    }

    /// State after the most recent line
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Finish the scan and hand back the collected forecasts
    pub fn finish(self) -> (ForecastCollection, ScanStats) {
        debug!(
            "Forecast scan complete: {} lines, {} localities, {} rows",
            self.stats.lines_read,
            self.forecasts.len(),
            self.stats.data_rows
        );
        (self.forecasts, self.stats)
    }
}

/// Scan a whole forecast report, failing on the first malformed row
pub fn scan_forecast_report<'a, I>(lines: I) -> Result<(ForecastCollection, ScanStats)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = ForecastScanner::new();
    for line in lines {
        scanner.process_line(line)?;
    }
    Ok(scanner.finish())
}
