//! Metric length unit conversion.
//!
//! Only the seven decimal length units that appear in SMN visibility fields
//! are supported; each step in [`LengthUnit::ALL`] is a factor of ten.

use crate::error::{Result, SmnError};

/// Metric length units, ascending by magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Decameter,
    Hectometer,
    Kilometer,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 7] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Decimeter,
        LengthUnit::Meter,
        LengthUnit::Decameter,
        LengthUnit::Hectometer,
        LengthUnit::Kilometer,
    ];

    /// Abbreviation as written in SMN reports
    pub fn abbreviation(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Decimeter => "dm",
            LengthUnit::Meter => "mts",
            LengthUnit::Decameter => "dam",
            LengthUnit::Hectometer => "hm",
            LengthUnit::Kilometer => "km",
        }
    }

    /// Look up a unit by its report abbreviation
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.abbreviation() == abbreviation)
    }

    fn rank(&self) -> i32 {
        *self as i32
    }
}

/// Convert `value` from one unit abbreviation to another.
///
/// Identical abbreviations return `value` untouched, even when the
/// abbreviation is not a known unit.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    if from == to {
        return Ok(value);
    }

    let source = LengthUnit::from_abbreviation(from).ok_or_else(|| SmnError::UnrecognizedUnit {
        unit: from.to_string(),
    })?;
    let target = LengthUnit::from_abbreviation(to).ok_or_else(|| SmnError::UnrecognizedUnit {
        unit: to.to_string(),
    })?;

    Ok(convert_units(value, source, target))
}

/// Convert between two known units
pub fn convert_units(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    // Positive steps go from a larger unit to a smaller one. Dividing for
    // the negative case keeps 100 mts -> 0.1 km exact.
    let steps = from.rank() - to.rank();
    if steps >= 0 {
        value * 10f64.powi(steps)
    } else {
        value / 10f64.powi(-steps)
    }
}
