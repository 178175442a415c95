//! Discovery of per-year station files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IoError;

/// Per-station map of available `(year, path)` pairs, ascending by year.
pub type StationFiles = BTreeMap<String, Vec<(i32, PathBuf)>>;

/// Scans `base` for `<year>/<STATION>.csv` files.
///
/// Directory names that do not parse as a year are skipped, as are files
/// without a `.csv` extension. The result is deterministic: stations are
/// keyed in lexical order and each station's files are sorted by year.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `base` is not a directory, or
/// [`IoError::Io`] if a directory cannot be read.
pub fn discover_stations(base: &Path) -> Result<StationFiles, IoError> {
    if !base.is_dir() {
        return Err(IoError::FileNotFound {
            path: base.to_path_buf(),
        });
    }

    let mut stations: StationFiles = BTreeMap::new();

    for entry in std::fs::read_dir(base)? {
        let year_dir = entry?.path();
        if !year_dir.is_dir() {
            continue;
        }
        let Some(year) = year_dir
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.parse::<i32>().ok())
        else {
            debug!(path = %year_dir.display(), "skipping non-year directory");
            continue;
        };

        for entry in std::fs::read_dir(&year_dir)? {
            let file = entry?.path();
            if !file.is_file() || file.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            stations
                .entry(stem.to_string())
                .or_default()
                .push((year, file));
        }
    }

    for files in stations.values_mut() {
        files.sort_by_key(|(year, _)| *year);
    }

    Ok(stations)
}
