//! Current conditions ("tiempo presente") report parsing.
//!
//! Every line of the report is one locality's latest observation, with ten
//! `;`-separated fields and optional `/` padding at either end.

use crate::constants::{
    CURRENT_FIELD_COUNT, CURRENT_FIELD_DELIMITER, CURRENT_RECORD_PADDING, current_locality_key,
};
use crate::error::{Result, SmnError};
use crate::fields::{
    parse_localized_timestamp, parse_number, parse_pressure, parse_thermal_sensation,
    parse_visibility_km, parse_wind,
};
use crate::models::CurrentConditions;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Parse one current conditions record into its locality key and observation
pub fn parse_current_line(line: &str) -> Result<(String, CurrentConditions)> {
    let record = line.trim_end().trim_matches(CURRENT_RECORD_PADDING);
    let fields: Vec<&str> = record.split(CURRENT_FIELD_DELIMITER).collect();

    let [
        locality,
        date,
        time,
        description,
        visibility,
        temperature,
        thermal,
        humidity,
        wind,
        pressure,
    ] = fields.as_slice()
    else {
        return Err(SmnError::FieldCount {
            expected: CURRENT_FIELD_COUNT,
            found: fields.len(),
        });
    };

    let conditions = CurrentConditions {
        timestamp: parse_localized_timestamp(date, time)?,
        description: description.to_string(),
        visibility_km: parse_visibility_km(visibility)?,
        temperature: parse_number("temperature", temperature)?,
        thermal_sensation: parse_thermal_sensation(thermal)?,
        humidity: parse_number("humidity", humidity)?,
        wind: parse_wind(wind)?,
        pressure: parse_pressure(pressure),
    };

    Ok((current_locality_key(locality), conditions))
}

/// All localities from one current conditions report
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurrentConditionsReport {
    localities: BTreeMap<String, CurrentConditions>,
}

impl CurrentConditionsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a locality's observation, replacing any earlier one
    pub fn insert(&mut self, locality: String, conditions: CurrentConditions) {
        self.localities.insert(locality, conditions);
    }

    /// Look up a locality; the query is trimmed and lower-cased first
    pub fn get(&self, locality: &str) -> Option<&CurrentConditions> {
        self.localities.get(&current_locality_key(locality))
    }

    /// Like [`get`](Self::get) but reports a missing locality as an error
    pub fn require(&self, locality: &str) -> Result<&CurrentConditions> {
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

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CurrentConditions)> {
        self.localities.iter()
    }
}

/// Parse a whole current conditions report.
///
/// Blank lines are skipped. The first malformed record aborts the parse.
pub fn parse_current_report<'a, I>(lines: I) -> Result<CurrentConditionsReport>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = CurrentConditionsReport::new();

    for (index, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (locality, conditions) = parse_current_line(line).inspect_err(|e| {
            warn!("Rejected current conditions line {}: {}", index + 1, e);
        })?;
        report.insert(locality, conditions);
    }

    debug!(
        "Parsed current conditions for {} localities",
        report.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wind;
    use chrono::NaiveDate;

    const BUENOS_AIRES: &str =
        "BUENOS AIRES;01-ENE-2020;14:00;Despejado;10 km;25.3;24.0;45;NE 15;1013/";

    #[test]
    fn test_parse_reference_line() {
        let (locality, conditions) = parse_current_line(BUENOS_AIRES).unwrap();

        assert_eq!(locality, "buenos aires");
        assert_eq!(
            conditions.timestamp,
            NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap()
        );
        assert_eq!(conditions.description, "Despejado");
        assert_eq!(conditions.visibility_km, 10.0);
        assert_eq!(conditions.temperature, 25.3);
        assert_eq!(conditions.thermal_sensation, Some(24.0));
        assert_eq!(conditions.humidity, 45.0);
        assert_eq!(conditions.wind, Wind::new("NE", 15.0));
        assert_eq!(conditions.pressure, Some(1013.0));
    }

    #[test]
    fn test_parse_line_with_sentinels_and_padding() {
        let line = "/Azul;01-Enero-2020;09:00;Niebla;Menor a 100mts;8.0;No se calcula; 97;Direcciones variables  3;  /  \r\n";
        let (locality, conditions) = parse_current_line(line).unwrap();

        assert_eq!(locality, "azul");
        assert_eq!(conditions.visibility_km, 0.1);
        assert_eq!(conditions.thermal_sensation, None);
        assert_eq!(conditions.humidity, 97.0);
        assert_eq!(conditions.wind, Wind::new("Variable", 3.0));
        assert_eq!(conditions.pressure, None);
    }

    #[test]
    fn test_field_count_mismatch() {
        let err = parse_current_line("AZUL;01-Enero-2020;09:00").unwrap_err();
        assert!(matches!(
            err,
            SmnError::FieldCount {
                expected: 10,
                found: 3
            }
        ));
    }

    #[test]
    fn test_malformed_field_propagates() {
        let line = "AZUL;01-Enero-2020;09:00;Nublado;10 km;templado;8.0;90;S 10;1010/";
        assert!(matches!(
            parse_current_line(line),
            Err(SmnError::MalformedField {
                field: "temperature",
                ..
            })
        ));
    }

    #[test]
    fn test_report_lookup_and_blank_lines() {
        let text = format!(
            "{}\n\nAzul;01-Enero-2020;09:00;Nublado;10 km;8.0;7.5;90;Calma;1010/\n",
            BUENOS_AIRES
        );
        let report = parse_current_report(text.lines()).unwrap();

        assert_eq!(report.len(), 2);
        assert!(report.get("  Buenos Aires ").is_some());
        assert_eq!(report.require("AZUL").unwrap().wind, Wind::new("Calma", 0.0));
        assert!(matches!(
            report.require("Rosario"),
            Err(SmnError::LocalityNotFound { .. })
        ));
    }

    #[test]
    fn test_report_fails_fast() {
        let text = format!("{}\nAZUL;roto\n", BUENOS_AIRES);
        let err = parse_current_report(text.lines()).unwrap_err();
        assert!(matches!(
            err,
            SmnError::FieldCount {
                expected: 10,
                found: 2
            }
        ));
    }
}
