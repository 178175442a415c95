//! Writing of synthetic hourly series.

use std::path::Path;

use crate::error::IoError;

/// Writes a synthetic series as one value per row, no header.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] on write failure.
pub fn write_series(path: &Path, values: &[f64]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    for v in values {
        writer.write_record([v.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
