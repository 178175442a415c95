use anyhow::{Context, Result};
use tracing::{info, warn};

use tmy_io::{InventoryRow, discover_stations, read_station_registry, write_inventory};

use crate::cli::InventoryArgs;
use crate::config;

/// Produce the station inventory report.
pub fn run(args: InventoryArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;

    let input = args.input.or(cfg.io.input).ok_or_else(|| {
        anyhow::anyhow!("no input directory: set [io].input in config or use --input")
    })?;
    let registry_path = args.registry.or(cfg.io.registry).ok_or_else(|| {
        anyhow::anyhow!("no station registry: set [io].registry in config or use --registry")
    })?;
    let output = args.output.or(cfg.io.inventory).ok_or_else(|| {
        anyhow::anyhow!("no inventory path: set [io].inventory in config or use --output")
    })?;
    let min_years = cfg.select.min_years;

    let registry = read_station_registry(&registry_path).with_context(|| {
        format!(
            "failed to read station registry: {}",
            registry_path.display()
        )
    })?;
    info!(n_stations = registry.len(), "station registry loaded");

    let station_files = discover_stations(&input)
        .with_context(|| format!("failed to scan input directory: {}", input.display()))?;

    let rows: Vec<InventoryRow> = station_files
        .into_iter()
        .map(|(station, files)| {
            let record = registry.get(&station).cloned();
            if record.is_none() {
                warn!(station = %station, "station not present in registry");
            }
            let years: Vec<i32> = files.iter().map(|(year, _)| *year).collect();
            // Year availability is a screen; generate still validates each
            // year's hourly record before counting it.
            let qualifying = years.len() >= min_years;
            InventoryRow {
                station,
                record,
                years,
                qualifying,
            }
        })
        .collect();

    write_inventory(&output, &rows)
        .with_context(|| format!("failed to write inventory: {}", output.display()))?;
    info!(path = %output.display(), n_stations = rows.len(), "inventory written");
    Ok(())
}
