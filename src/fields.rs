//! Field parsing utilities for SMN report records
//!
//! Each SMN field has its own encoding: visibility carries its unit glued to
//! the number, wind may be a phrase, thermal sensation and pressure use
//! sentinels for missing values, and dates spell the month in Spanish.
//! These helpers turn the raw text into typed values.

use crate::constants::{
    CURRENT_TIME_FORMAT, THERMAL_NOT_COMPUTED, VARIABLE_WIND_DIRECTION, month_number,
};
use crate::error::{Result, SmnError};
use crate::models::Wind;
use crate::units::{self, LengthUnit};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a required finite number
pub fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|e| SmnError::malformed(field, trimmed, format!("{}", e)))?;

    if !value.is_finite() {
        return Err(SmnError::malformed(field, trimmed, "value is not finite"));
    }
    Ok(value)
}

/// Parse a visibility such as "Menor a 100mts" or "10 km" into kilometers
pub fn parse_visibility_km(text: &str) -> Result<f64> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| SmnError::malformed("visibility", text, "no numeric magnitude"))?;

    let rest = &text[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());

    let magnitude = parse_number("visibility", &rest[..end])?;
    let unit: String = rest[end..].chars().filter(|c| !c.is_whitespace()).collect();

    units::convert(magnitude, &unit, LengthUnit::Kilometer.abbreviation())
}

/// Parse a wind descriptor.
///
/// "Calma" has no speed, "NE 15" is direction and speed, and longer phrases
/// such as "Direcciones variables  3" become the variable direction with the
/// trailing magnitude as speed.
pub fn parse_wind(text: &str) -> Result<Wind> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(SmnError::malformed("wind", text, "empty wind descriptor")),
        [direction] => Ok(Wind::new(*direction, 0.0)),
        [direction, speed] => Ok(Wind::new(*direction, parse_number("wind", speed)?)),
        [.., speed] => Ok(Wind::new(
            VARIABLE_WIND_DIRECTION,
            parse_number("wind", speed)?,
        )),
    }
}

/// Parse a thermal sensation, absent when not computed or blank
pub fn parse_thermal_sensation(text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == THERMAL_NOT_COMPUTED {
        return Ok(None);
    }
    parse_number("thermal sensation", trimmed).map(Some)
}

/// Parse a pressure such as "1013/".
///
/// Only all-digit values are accepted; anything else, including decimals
/// like "1013.5", is reported as absent.
pub fn parse_pressure(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '/');
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Combine a "01-Enero-2020" date and a "14:00" time into a timestamp
pub fn parse_localized_timestamp(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = parse_localized_date(date)?;
    let time = NaiveTime::parse_from_str(time.trim(), CURRENT_TIME_FORMAT)
        .map_err(|e| SmnError::malformed("time", time.trim(), e.to_string()))?;

    Ok(date.and_time(time))
}

/// Parse a "day-Month-year" date with a Spanish month name
pub fn parse_localized_date(date: &str) -> Result<NaiveDate> {
    let trimmed = date.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(SmnError::malformed(
            "date",
            trimmed,
            "expected day-month-year",
        ));
    };

    let month = month_number(month).ok_or_else(|| SmnError::UnknownMonth {
        name: month.to_string(),
    })?;
    let day: u32 = day
        .parse()
        .map_err(|_| SmnError::malformed("date", trimmed, "invalid day"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| SmnError::malformed("date", trimmed, "invalid year"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SmnError::malformed("date", trimmed, "date does not exist"))
}
