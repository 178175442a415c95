//! Station registry reading and name sanitation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::IoError;

/// One station registry record.
///
/// Numeric fields are optional because registry exports routinely leave
/// them blank.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    /// Registry identifier.
    pub id: Option<String>,
    /// Display name, as published by the registry.
    pub name: String,
    /// Longitude in degrees.
    pub lon: Option<f64>,
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Altitude in metres.
    pub alt: Option<f64>,
    /// Administrative department code.
    #[serde(rename = "department_id")]
    pub department: Option<String>,
}

/// Normalizes a registry display name to the form used by station file stems.
///
/// Uppercases the name, turns path separators and whitespace into
/// underscores, drops every other non-alphanumeric character, collapses
/// runs of underscores and trims leading/trailing ones.
pub fn sanitize_station_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.to_uppercase().chars() {
        match c {
            '/' | '\\' | ' ' | '\t' => out.push('_'),
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            _ => {}
        }
    }
    while out.contains("__") {
        out = out.replace("__", "_");
    }
    out.trim_matches('_').to_string()
}

/// Reads a station registry CSV, keyed by sanitized station name.
///
/// Columns beyond the [`StationRecord`] fields are ignored.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be read or a record cannot
/// be deserialized.
pub fn read_station_registry(path: &Path) -> Result<BTreeMap<String, StationRecord>, IoError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut registry = BTreeMap::new();
    for result in reader.deserialize::<StationRecord>() {
        let record = result?;
        registry.insert(sanitize_station_name(&record.name), record);
    }

    Ok(registry)
}
