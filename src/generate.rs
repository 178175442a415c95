use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use tmy_calendar::HOURS_PER_YEAR;
use tmy_io::{ProvenanceRow, discover_stations, read_hourly_csv, write_provenance, write_series};
use tmy_select::{Criterion, SelectConfig, StationSynthesis, StationYears, synthesize};

use crate::cli::GenerateArgs;
use crate::config;

/// Run the full synthesis pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;

    let input = args.input.or(cfg.io.input).ok_or_else(|| {
        anyhow::anyhow!("no input directory: set [io].input in config or use --input")
    })?;
    let output = args.output.or(cfg.io.output).ok_or_else(|| {
        anyhow::anyhow!("no output directory: set [io].output in config or use --output")
    })?;
    let min_years = args.min_years.unwrap_or(cfg.select.min_years);
    let column = cfg.io.temp_column;
    let select_cfg = SelectConfig::new().with_min_years(min_years);

    info!(path = %input.display(), "scanning station files");
    let station_files = discover_stations(&input)
        .with_context(|| format!("failed to scan input directory: {}", input.display()))?;
    info!(n_stations = station_files.len(), "stations discovered");

    // Stations are independent; synthesize them in parallel and collect the
    // per-station results before any output is written.
    let stations: Vec<(String, Vec<(i32, PathBuf)>)> = station_files.into_iter().collect();
    let syntheses: Vec<StationSynthesis> = stations
        .into_par_iter()
        .map(|(station, files)| synthesize_station(&station, &files, column, &select_cfg))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    info!(n_synthesized = syntheses.len(), "station synthesis complete");

    fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory: {}", output.display()))?;

    for synthesis in &syntheses {
        write_station(&output, synthesis)?;
    }

    for criterion in Criterion::ALL {
        let rows: Vec<ProvenanceRow> = syntheses
            .iter()
            .map(|s| ProvenanceRow {
                station: s.station().to_string(),
                source_years: *s.series(criterion).source_years(),
            })
            .collect();
        let path = output.join(format!("source_years_{criterion}.csv"));
        write_provenance(&path, &rows)
            .with_context(|| format!("failed to write provenance table: {}", path.display()))?;
    }

    info!(path = %output.display(), "output written");
    Ok(())
}

/// Reads one station's qualifying years and synthesizes its three series.
///
/// Returns `Ok(None)` when the station has too few qualifying years.
fn synthesize_station(
    station: &str,
    files: &[(i32, PathBuf)],
    column: usize,
    config: &SelectConfig,
) -> Result<Option<StationSynthesis>> {
    let mut records = Vec::with_capacity(files.len());
    for (year, path) in files {
        let values = read_hourly_csv(path, column)
            .with_context(|| format!("failed to read hourly data: {}", path.display()))?;
        if values.len() == HOURS_PER_YEAR {
            records.push((*year, values));
        } else {
            debug!(
                station,
                year = *year,
                n_values = values.len(),
                "dropping incomplete year"
            );
        }
    }

    if records.len() < config.min_years() {
        info!(
            station,
            n_years = records.len(),
            "skipping station with insufficient history"
        );
        return Ok(None);
    }

    let years = StationYears::new(station, records)
        .with_context(|| format!("invalid hourly data for station {station}"))?;
    let synthesis = synthesize(&years, config)
        .with_context(|| format!("synthesis failed for station {station}"))?;
    Ok(Some(synthesis))
}

/// Writes one station's three series under `<output>/<station>/`.
fn write_station(output: &Path, synthesis: &StationSynthesis) -> Result<()> {
    let station_dir = output.join(synthesis.station());
    fs::create_dir_all(&station_dir).with_context(|| {
        format!(
            "failed to create station directory: {}",
            station_dir.display()
        )
    })?;

    for series in synthesis.iter() {
        let path = station_dir.join(format!("{}_{}.csv", synthesis.station(), series.criterion()));
        write_series(&path, series.values())
            .with_context(|| format!("failed to write series: {}", path.display()))?;
    }
    Ok(())
}
