//! Application constants for the SMN processor
//!
//! This module contains the feed selectors, report sentinels, localized
//! lookup tables and JSON field labels used throughout the processor.

// =============================================================================
// Feed Retrieval
// =============================================================================

/// SMN open data download endpoint; the feed selector goes in the `dato` query
pub const DEFAULT_DOWNLOAD_URL: &str = "https://ssl.smn.gob.ar/dpd/zipopendata.php";

/// Query parameter carrying the feed selector
pub const FEED_QUERY_PARAM: &str = "dato";

/// Feed selector for current conditions ("tiempo presente")
pub const FEED_CURRENT_CONDITIONS: &str = "tiepre";

/// Feed selector for the 5-day forecast ("pronóstico 5 días")
pub const FEED_FORECAST: &str = "pron5d";

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent with feed requests
pub const DEFAULT_USER_AGENT: &str = concat!("smn_processor/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Current Conditions Report
// =============================================================================

/// Field delimiter in current conditions records
pub const CURRENT_FIELD_DELIMITER: char = ';';

/// Padding character stripped from both ends of a current conditions record
pub const CURRENT_RECORD_PADDING: char = '/';

/// Number of fields in a current conditions record
pub const CURRENT_FIELD_COUNT: usize = 10;

/// Thermal sensation sentinel meaning "not computed"
pub const THERMAL_NOT_COMPUTED: &str = "No se calcula";

/// Wind direction label used when the report says "Direcciones variables"
pub const VARIABLE_WIND_DIRECTION: &str = "Variable";

/// Time-of-day format in current conditions records
pub const CURRENT_TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Forecast Report
// =============================================================================

/// Leading glyph of the rule line drawn under each locality name
pub const FORECAST_HEADER_RULE: char = '=';

/// Token separating wind direction from wind speed in forecast rows
pub const FORECAST_WIND_SEPARATOR: &str = "|";

/// Suffix trailing every forecast hour label ("00Hs.")
pub const FORECAST_HOUR_SUFFIX: &str = "Hs.";

/// Number of tokens in a forecast row once the wind separator is removed
pub const FORECAST_ROW_TOKENS: usize = 6;

/// Date key format for serialized forecasts
pub const FORECAST_DATE_KEY_FORMAT: &str = "%d-%m-%Y";

/// Timestamp format for serialized current conditions
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// Localized Month Names
// =============================================================================

/// Spanish month names, January first: (full name, three-letter code)
pub const MONTHS: [(&str, &str); 12] = [
    ("Enero", "ENE"),
    ("Febrero", "FEB"),
    ("Marzo", "MAR"),
    ("Abril", "ABR"),
    ("Mayo", "MAY"),
    ("Junio", "JUN"),
    ("Julio", "JUL"),
    ("Agosto", "AGO"),
    ("Septiembre", "SEP"),
    ("Octubre", "OCT"),
    ("Noviembre", "NOV"),
    ("Diciembre", "DIC"),
];

// =============================================================================
// Output Field Labels
// =============================================================================

/// JSON keys used in serialized records
pub mod keys {
    pub const FECHA: &str = "fecha";
    pub const DESCRIPCION: &str = "desc";
    pub const VISIBILIDAD: &str = "visibilidad";
    pub const TEMP: &str = "temp";
    pub const TERMICA: &str = "termica";
    pub const HUMEDAD: &str = "humedad";
    pub const VIENTO: &str = "viento";
    pub const PRESION: &str = "presion";
    pub const VIENTO_DIR: &str = "viento_dir";
    pub const VIENTO_VEL: &str = "viento_vel";
    pub const PRECIP: &str = "precip";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Month number (1-12) for a Spanish month name or three-letter code
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.trim();
    MONTHS
        .iter()
        .position(|(full, code)| full.eq_ignore_ascii_case(name) || code.eq_ignore_ascii_case(name))
        .map(|index| index as u32 + 1)
}

/// Month number (1-12) for a three-letter forecast code only
pub fn month_number_from_code(code: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|index| index as u32 + 1)
}

/// Normalize a locality query the way current conditions keys are stored
pub fn current_locality_key(locality: &str) -> String {
    locality.trim().to_lowercase()
}

/// Normalize a locality query the way forecast headers are written
pub fn forecast_locality_key(locality: &str) -> String {
    locality.trim().to_uppercase().replace(' ', "_")
}
