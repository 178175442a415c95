//! Writing of the station inventory report.

use std::path::Path;

use crate::error::IoError;
use crate::registry::StationRecord;

/// One inventory report row.
#[derive(Debug, Clone)]
pub struct InventoryRow {
    /// Station identifier (file stem).
    pub station: String,
    /// Matching registry record, if any.
    pub record: Option<StationRecord>,
    /// Available source years, ascending.
    pub years: Vec<i32>,
    /// Whether the station has enough years for synthesis.
    pub qualifying: bool,
}

const HEADER: [&str; 8] = [
    "station",
    "id",
    "longitude",
    "latitude",
    "altitude",
    "department",
    "years",
    "qualifying",
];

/// Writes the station inventory report.
///
/// Stations without a registry record get empty metadata cells. The years
/// column holds the comma-joined ascending year list.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] on write failure.
pub fn write_inventory(path: &Path, rows: &[InventoryRow]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for row in rows {
        let (id, lon, lat, alt, department) = match &row.record {
            Some(r) => (
                r.id.clone().unwrap_or_default(),
                r.lon.map(|v| v.to_string()).unwrap_or_default(),
                r.lat.map(|v| v.to_string()).unwrap_or_default(),
                r.alt.map(|v| v.to_string()).unwrap_or_default(),
                r.department.clone().unwrap_or_default(),
            ),
            None => Default::default(),
        };
        let years = row
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let qualifying = if row.qualifying { "yes" } else { "no" };

        writer.write_record([
            row.station.as_str(),
            &id,
            &lon,
            &lat,
            &alt,
            &department,
            &years,
            qualifying,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record() -> StationRecord {
        StationRecord {
            id: Some("07480".to_string()),
            name: "Lyon / Bron".to_string(),
            lon: Some(4.94),
            lat: Some(45.73),
            alt: Some(198.0),
            department: Some("69".to_string()),
        }
    }

    #[test]
    fn writes_matched_and_unmatched_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let rows = vec![
            InventoryRow {
                station: "LYON_BRON".to_string(),
                record: Some(record()),
                years: vec![2000, 2001, 2002],
                qualifying: false,
            },
            InventoryRow {
                station: "UNKNOWN".to_string(),
                record: None,
                years: vec![2005],
                qualifying: false,
            },
        ];
        write_inventory(&path, &rows).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "station,id,longitude,latitude,altitude,department,years,qualifying"
        );
        assert_eq!(
            lines.next().unwrap(),
            "LYON_BRON,07480,4.94,45.73,198,69,\"2000,2001,2002\",no"
        );
        assert_eq!(lines.next().unwrap(), "UNKNOWN,,,,,,2005,no");
        assert!(lines.next().is_none());
    }

    #[test]
    fn qualifying_flag_is_yes_or_no() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let rows = vec![InventoryRow {
            station: "A".to_string(),
            record: None,
            years: (2000..2010).collect(),
            qualifying: true,
        }];
        write_inventory(&path, &rows).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",yes"));
    }
}
