//! JSON-shaped representations of parsed reports.
//!
//! Every entity that leaves the crate implements [`ToPlainValue`], which
//! builds a plain `serde_json::Value` (objects, arrays, numbers, strings and
//! null). Rendering to text is a thin layer on top.

use crate::constants::{TIMESTAMP_FORMAT, keys};
use crate::current::CurrentConditionsReport;
use crate::error::Result;
use crate::forecast::{ForecastCollection, HourlyForecast, LocalityForecast};
use crate::models::{CurrentConditions, ForecastSample, Wind};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value, json};

/// Conversion into a plain JSON value
pub trait ToPlainValue {
    fn to_plain_value(&self) -> Value;
}

impl ToPlainValue for Wind {
    fn to_plain_value(&self) -> Value {
        json!([self.direction, self.speed])
    }
}

impl ToPlainValue for CurrentConditions {
    fn to_plain_value(&self) -> Value {
        let mut record = Map::new();
        record.insert(
            keys::FECHA.to_string(),
            json!(self.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        );
        record.insert(keys::DESCRIPCION.to_string(), json!(self.description));
        record.insert(keys::VISIBILIDAD.to_string(), json!(self.visibility_km));
        record.insert(keys::TEMP.to_string(), json!(self.temperature));
        record.insert(keys::TERMICA.to_string(), json!(self.thermal_sensation));
        record.insert(keys::HUMEDAD.to_string(), json!(self.humidity));
        record.insert(keys::VIENTO.to_string(), self.wind.to_plain_value());
        record.insert(keys::PRESION.to_string(), json!(self.pressure));
        Value::Object(record)
    }
}

impl ToPlainValue for CurrentConditionsReport {
    fn to_plain_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(locality, conditions)| (locality.clone(), conditions.to_plain_value()))
                .collect(),
        )
    }
}

impl ToPlainValue for ForecastSample {
    fn to_plain_value(&self) -> Value {
        let mut sample = Map::new();
        sample.insert(keys::TEMP.to_string(), json!(self.temperature));
        sample.insert(keys::VIENTO_DIR.to_string(), json!(self.wind_direction));
        sample.insert(keys::VIENTO_VEL.to_string(), json!(self.wind_speed));
        sample.insert(keys::PRECIP.to_string(), json!(self.precipitation));
        Value::Object(sample)
    }
}

impl ToPlainValue for HourlyForecast {
    fn to_plain_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(hour, sample)| (hour.clone(), sample.to_plain_value()))
                .collect(),
        )
    }
}

impl ToPlainValue for LocalityForecast {
    fn to_plain_value(&self) -> Value {
        Value::Object(self.serialize())
    }
}

impl ToPlainValue for ForecastCollection {
    fn to_plain_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(locality, forecast)| (locality.clone(), forecast.to_plain_value()))
                .collect(),
        )
    }
}

/// Render an entity as JSON text; pretty output is tab-indented
pub fn to_json_string<T: ToPlainValue + ?Sized>(entity: &T, pretty: bool) -> Result<String> {
    let value = entity.to_plain_value();
    if !pretty {
        return Ok(serde_json::to_string(&value)?);
    }

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
