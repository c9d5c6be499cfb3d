//! Per-locality forecast storage.
//!
//! A [`LocalityForecast`] maps each calendar date to the samples forecast for
//! each hour of that date. [`ForecastCollection`] keys those by locality name
//! exactly as the report headers spell it ("BUENOS_AIRES").

use crate::constants::{
    FORECAST_DATE_KEY_FORMAT, FORECAST_HOUR_SUFFIX, forecast_locality_key, month_number_from_code,
};
use crate::error::{Result, SmnError};
use crate::fields::parse_number;
use crate::models::ForecastSample;
use crate::serialize::ToPlainValue;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Samples for one date, keyed by hour label ("00", "03", ...)
pub type HourlyForecast = BTreeMap<String, ForecastSample>;

/// Forecast for a single locality
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocalityForecast {
    days: BTreeMap<NaiveDate, HourlyForecast>,
}

impl LocalityForecast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample from the raw tokens of a forecast row.
    ///
    /// `date` looks like "31/DIC/2019" and `hour` like "00Hs.". A sample
    /// already stored for the same date and hour is replaced.
    pub fn add_sample(
        &mut self,
        date: &str,
        hour: &str,
        temperature: &str,
        wind_direction: &str,
        wind_speed: &str,
        precipitation: &str,
    ) -> Result<()> {
        let sample = ForecastSample {
            temperature: parse_number("forecast temperature", temperature)?,
            wind_direction: wind_direction.trim().parse().map_err(|e| {
                SmnError::malformed("forecast wind direction", wind_direction, format!("{}", e))
            })?,
            wind_speed: parse_number("forecast wind speed", wind_speed)?,
            precipitation: parse_number("forecast precipitation", precipitation)?,
        };

        let date = parse_forecast_date(date)?;
        let hour = hour
            .trim()
            .strip_suffix(FORECAST_HOUR_SUFFIX)
            .ok_or_else(|| SmnError::malformed("forecast hour", hour, "missing 'Hs.' suffix"))?;

        self.insert(date, hour.to_string(), sample);
        Ok(())
    }

    /// Store a sample, replacing any existing one at the same date and hour
    pub fn insert(&mut self, date: NaiveDate, hour: String, sample: ForecastSample) {
        self.days.entry(date).or_default().insert(hour, sample);
    }

    /// Hourly samples for an exact date
    pub fn forecast_for(&self, day: u32, month: u32, year: i32) -> Result<&HourlyForecast> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| self.days.get(&date))
            .ok_or(SmnError::DateNotInForecast { day, month, year })
    }

    /// Dates covered by this forecast, earliest first
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Number of forecast dates
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total samples across all dates
    pub fn sample_count(&self) -> usize {
        self.days.values().map(|hours| hours.len()).sum()
    }

    /// Date-keyed representation: "DD-MM-YYYY" -> hour -> sample, earliest first
    pub fn serialize(&self) -> Map<String, Value> {
        self.days
            .iter()
            .map(|(date, hours)| {
                (
                    date.format(FORECAST_DATE_KEY_FORMAT).to_string(),
                    hours.to_plain_value(),
                )
            })
            .collect()
    }
}

/// Parse a forecast date such as "31/DIC/2019"
pub fn parse_forecast_date(date: &str) -> Result<NaiveDate> {
    let trimmed = date.trim();
    let parts: Vec<&str> = trimmed.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(SmnError::malformed(
            "forecast date",
            trimmed,
            "expected day/MON/year",
        ));
    };

    let month = month_number_from_code(month).ok_or_else(|| SmnError::UnknownMonth {
        name: month.to_string(),
    })?;
    let day: u32 = day
        .parse()
        .map_err(|_| SmnError::malformed("forecast date", trimmed, "invalid day"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| SmnError::malformed("forecast date", trimmed, "invalid year"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SmnError::malformed("forecast date", trimmed, "date does not exist"))
}

/// Forecasts for every locality in one report
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ForecastCollection {
    localities: BTreeMap<String, LocalityForecast>,
}

impl ForecastCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forecast for a locality as named in the report, created on first use
    pub fn locality_mut(&mut self, locality: &str) -> &mut LocalityForecast {
        self.localities.entry(locality.to_string()).or_default()
    }

    /// Look up a locality; "Buenos Aires" finds "BUENOS_AIRES"
    pub fn get(&self, locality: &str) -> Option<&LocalityForecast> {
        self.localities
            .get(locality)
            .or_else(|| self.localities.get(&forecast_locality_key(locality)))
    }

    /// Like [`get`](Self::get) but reports a missing locality as an error
    pub fn require(&self, locality: &str) -> Result<&LocalityForecast> {
        self.get(locality).ok_or_else(|| SmnError::LocalityNotFound {
            locality: locality.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.localities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.localities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LocalityForecast)> {
        self.localities.iter()
    }

    /// Take ownership of one locality's forecast
    pub fn remove(&mut self, locality: &str) -> Option<LocalityForecast> {
        match self.localities.remove(locality) {
            Some(forecast) => Some(forecast),
            None => self.localities.remove(&forecast_locality_key(locality)),
        }
    }
}
