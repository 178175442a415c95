//! # tmy-io
//!
//! Read per-station hourly CSV files and write synthetic-year output.
//! Bridges the on-disk CSV layout into the generator's slice-based APIs.
//!
//! Input is laid out as `<base>/<year>/<STATION>.csv`, one headerless
//! numeric temperature column per file. Output is one CSV per synthetic
//! series (one value per row, no header), one provenance table per
//! criterion (rows = stations, columns = calendar months) and one
//! station inventory report.

mod discover;
mod error;
mod hourly;
mod inventory;
mod provenance;
mod registry;
mod series;

pub use discover::{StationFiles, discover_stations};
pub use error::IoError;
pub use hourly::read_hourly_csv;
pub use inventory::{InventoryRow, write_inventory};
pub use provenance::{ProvenanceRow, write_provenance};
pub use registry::{StationRecord, read_station_registry, sanitize_station_name};
pub use series::write_series;
