//! Writing of source-year provenance tables.

use std::path::Path;

use tmy_calendar::MONTH_NAMES;

use crate::error::IoError;

/// One provenance table row: a station and its twelve source years.
#[derive(Debug, Clone)]
pub struct ProvenanceRow {
    /// Station identifier.
    pub station: String,
    /// Source year used for each calendar month, January first.
    pub source_years: [i32; 12],
}

/// Writes a provenance table: a header of `station` plus the twelve month
/// names, then one row per station with the source-year labels.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] on write failure.
pub fn write_provenance(path: &Path, rows: &[ProvenanceRow]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["station".to_string()];
    header.extend(MONTH_NAMES[1..].iter().map(|n| n.to_string()));
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.station.clone()];
        record.extend(row.source_years.iter().map(|y| y.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provenance.csv");
        let rows = vec![
            ProvenanceRow {
                station: "ALPHA".to_string(),
                source_years: [2001, 2002, 2003, 2004, 2005, 2006, 2007, 2008, 2009, 2010, 2011, 2012],
            },
            ProvenanceRow {
                station: "BETA".to_string(),
                source_years: [2000; 12],
            },
        ];
        write_provenance(&path, &rows).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "station,January,February,March,April,May,June,July,August,September,October,November,December"
        );
        assert_eq!(
            lines.next().unwrap(),
            "ALPHA,2001,2002,2003,2004,2005,2006,2007,2008,2009,2010,2011,2012"
        );
        assert_eq!(
            lines.next().unwrap(),
            "BETA,2000,2000,2000,2000,2000,2000,2000,2000,2000,2000,2000,2000"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_table_still_has_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provenance.csv");
        write_provenance(&path, &[]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
