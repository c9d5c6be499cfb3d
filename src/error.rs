//! Error handling for SMN feed processing.
//!
//! Covers malformed report fields, forecast lookups that miss, unit
//! conversion failures and the I/O surrounding feed retrieval.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmnError {
    #[error("Malformed {field} field '{value}': {reason}")]
    MalformedField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Expected {expected} fields in record, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Unrecognized month name: {name}")]
    UnknownMonth { name: String },

    #[error("Unrecognized unit: {unit}")]
    UnrecognizedUnit { unit: String },

    #[error("Line {line}: {message}")]
    Structure { line: usize, message: String },

    #[error("The date {day}/{month}/{year} is not in the forecast")]
    DateNotInForecast { day: u32, month: u32, year: i32 },

    #[error("Locality not found in report: {locality}")]
    LocalityNotFound { locality: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Downloaded archive contains no entries")]
    EmptyArchive,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SmnError {
    /// Create a malformed field error
    pub fn malformed(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a report structure error for a 1-based line number
    pub fn structure(line: usize, message: impl Into<String>) -> Self {
        Self::Structure {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for errors a caller can recover from without discarding the scan
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::DateNotInForecast { .. } | Self::LocalityNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SmnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_not_in_forecast_message() {
        let err = SmnError::DateNotInForecast {
            day: 3,
            month: 1,
            year: 2020,
        };
        assert_eq!(err.to_string(), "The date 3/1/2020 is not in the forecast");
        assert!(err.is_lookup_miss());
    }

    #[test]
    fn test_malformed_field_message() {
        let err = SmnError::malformed("temperature", "abc", "not a number");
        assert_eq!(
            err.to_string(),
            "Malformed temperature field 'abc': not a number"
        );
        assert!(!err.is_lookup_miss());
    }

    #[test]
    fn test_structure_error_carries_line() {
        let err = SmnError::structure(12, "data row before any locality header");
        assert_eq!(
            err.to_string(),
            "Line 12: data row before any locality header"
        );
    }
}
