//! Month-wise source-year selection and splicing.

use tracing::debug;

use tmy_calendar::{HOURS_PER_YEAR, month_windows};
use tmy_stats::{mean, median};

use crate::config::SelectConfig;
use crate::criterion::{Criterion, Rule};
use crate::error::SelectError;
use crate::result::{StationSynthesis, SyntheticSeries};
use crate::station::StationYears;

/// Builds the three synthetic years for one station.
///
/// For each calendar month the across-year monthly means are computed once;
/// each criterion's rule then picks one source-year index, and both the
/// month's hourly slice and its provenance label derive from that same
/// index. The chosen slices are concatenated in calendar order, so each
/// output series has exactly [`HOURS_PER_YEAR`] values.
///
/// # Errors
///
/// Returns [`SelectError::InsufficientHistory`] if the station has fewer
/// qualifying years than `config.min_years()`, or
/// [`SelectError::InvalidConfig`] if the configuration is inconsistent.
#[tracing::instrument(skip(station, config), fields(station = station.station(), n_years = station.n_years()))]
pub fn synthesize(
    station: &StationYears,
    config: &SelectConfig,
) -> Result<StationSynthesis, SelectError> {
    config.validate()?;

    let n = station.n_years();
    if n < config.min_years() {
        return Err(SelectError::InsufficientHistory {
            n,
            min: config.min_years(),
        });
    }

    let mut values: [Vec<f64>; 3] = std::array::from_fn(|_| Vec::with_capacity(HOURS_PER_YEAR));
    let mut source_years = [[0i32; 12]; 3];

    for (month_idx, window) in month_windows().into_iter().enumerate() {
        let means: Vec<f64> = (0..n)
            .map(|y| mean(&station.values(y)[window.range()]))
            .collect();

        // The typical choice is shared by every rule that does not override it.
        let typical_idx = median_nearest(&means);

        for (slot, criterion) in Criterion::ALL.into_iter().enumerate() {
            let idx = match criterion.rule_for(window.month()) {
                Rule::MedianNearest => typical_idx,
                Rule::Coldest => argmin(&means),
                Rule::Hottest => argmax(&means),
            };
            values[slot].extend_from_slice(&station.values(idx)[window.range()]);
            source_years[slot][month_idx] = station.years()[idx];
        }

        debug!(
            month = window.month(),
            typical = station.years()[typical_idx],
            "month selection complete"
        );
    }

    let [typical, cold_winter, hot_summer] = values;
    Ok(StationSynthesis::new(
        station.station().to_string(),
        SyntheticSeries::new(Criterion::Typical, typical, source_years[0]),
        SyntheticSeries::new(Criterion::ColdWinter, cold_winter, source_years[1]),
        SyntheticSeries::new(Criterion::HotSummer, hot_summer, source_years[2]),
    ))
}

/// Index of the year whose mean is nearest the median of `means`; the first
/// index wins exact ties.
fn median_nearest(means: &[f64]) -> usize {
    let med = median(means);
    let distances: Vec<f64> = means.iter().map(|m| (m - med).abs()).collect();
    argmin(&distances)
}

/// Index of the smallest value; the first occurrence wins ties.
fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for i in 1..values.len() {
        if values[i] < values[best] {
            best = i;
        }
    }
    best
}

/// Index of the largest value; the first occurrence wins ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for i in 1..values.len() {
        if values[i] > values[best] {
            best = i;
        }
    }
    best
}
