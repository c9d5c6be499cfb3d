//! Core data structures for SMN feed processing.
//!
//! Defines the feed kinds and the typed records produced by the current
//! conditions parser and the forecast scanner.

use crate::constants::{FEED_CURRENT_CONDITIONS, FEED_FORECAST};
use chrono::NaiveDateTime;
use std::fmt;

/// Data products published by the SMN open data service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    CurrentConditions,
    Forecast,
}

impl FeedKind {
    /// Selector sent to the download endpoint
    pub fn selector(&self) -> &'static str {
        match self {
            FeedKind::CurrentConditions => FEED_CURRENT_CONDITIONS,
            FeedKind::Forecast => FEED_FORECAST,
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::CurrentConditions => write!(f, "current conditions"),
            FeedKind::Forecast => write!(f, "5-day forecast"),
        }
    }
}

/// Wind as reported in current conditions: a direction label and a speed
#[derive(Debug, Clone, PartialEq)]
pub struct Wind {
    /// Compass label ("NE"), calm marker ("Calma") or
    /// [`VARIABLE_WIND_DIRECTION`](crate::constants::VARIABLE_WIND_DIRECTION)
    pub direction: String,
    pub speed: f64,
}

impl Wind {
    pub fn new(direction: impl Into<String>, speed: f64) -> Self {
        Self {
            direction: direction.into(),
            speed,
        }
    }
}

/// One locality's observation from the current conditions feed
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub timestamp: NaiveDateTime,
    pub description: String,
    pub visibility_km: f64,
    pub temperature: f64,
    /// Absent when the report says the value was not computed
    pub thermal_sensation: Option<f64>,
    pub humidity: f64,
    pub wind: Wind,
    /// Absent when the reported value is not a plain integer
    pub pressure: Option<f64>,
}

/// Forecast values for one locality at one date and hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSample {
    pub temperature: f64,
    pub wind_direction: i32,
    pub wind_speed: f64,
    pub precipitation: f64,
}

/// Counters collected while scanning a forecast report
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub headers_found: usize,
    pub data_rows: usize,
    pub lines_ignored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_selectors() {
        assert_eq!(FeedKind::CurrentConditions.selector(), "tiepre");
        assert_eq!(FeedKind::Forecast.selector(), "pron5d");
        assert_eq!(FeedKind::Forecast.to_string(), "5-day forecast");
    }
}
