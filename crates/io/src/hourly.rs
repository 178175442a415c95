//! Reading of per-year hourly temperature files.

use std::path::Path;

use crate::error::IoError;

/// Reads one numeric column from a headerless hourly CSV file.
///
/// Rows whose field is empty or does not parse to a finite number are
/// dropped, mirroring how missing observations appear in the source files.
/// The caller decides whether the surviving count qualifies the year.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] if a record has fewer than
/// `column + 1` fields, or [`IoError::Csv`] on malformed CSV input.
pub fn read_hourly_csv(path: &Path, column: usize) -> Result<Vec<f64>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(field) = record.get(column) else {
            return Err(IoError::MissingColumn {
                column,
                path: path.to_path_buf(),
            });
        };
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        match field.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => continue,
        }
    }

    Ok(values)
}
