//! Output types for station synthesis.

use crate::criterion::Criterion;

/// One synthetic 8760-hour year plus the source year of each month.
///
/// Values and source years are two views of the same per-month selection:
/// the hour slice covering calendar month `m` was copied from the year in
/// `source_years()[m - 1]`.
#[derive(Debug, Clone)]
pub struct SyntheticSeries {
    criterion: Criterion,
    values: Vec<f64>,
    source_years: [i32; 12],
}

impl SyntheticSeries {
    pub(crate) fn new(criterion: Criterion, values: Vec<f64>, source_years: [i32; 12]) -> Self {
        Self {
            criterion,
            values,
            source_years,
        }
    }

    /// Returns the criterion this series was built for.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Returns the spliced hourly values (length 8760).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the source year used for each calendar month.
    pub fn source_years(&self) -> &[i32; 12] {
        &self.source_years
    }

    /// Consumes the series and returns the hourly values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// The three synthetic series of one station, immutable once built.
#[derive(Debug, Clone)]
pub struct StationSynthesis {
    station: String,
    typical: SyntheticSeries,
    cold_winter: SyntheticSeries,
    hot_summer: SyntheticSeries,
}

impl StationSynthesis {
    pub(crate) fn new(
        station: String,
        typical: SyntheticSeries,
        cold_winter: SyntheticSeries,
        hot_summer: SyntheticSeries,
    ) -> Self {
        Self {
            station,
            typical,
            cold_winter,
            hot_summer,
        }
    }

    /// Returns the station identifier.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Returns the typical series.
    pub fn typical(&self) -> &SyntheticSeries {
        &self.typical
    }

    /// Returns the cold-winter series.
    pub fn cold_winter(&self) -> &SyntheticSeries {
        &self.cold_winter
    }

    /// Returns the hot-summer series.
    pub fn hot_summer(&self) -> &SyntheticSeries {
        &self.hot_summer
    }

    /// Returns the series built for `criterion`.
    pub fn series(&self, criterion: Criterion) -> &SyntheticSeries {
        match criterion {
            Criterion::Typical => &self.typical,
            Criterion::ColdWinter => &self.cold_winter,
            Criterion::HotSummer => &self.hot_summer,
        }
    }

    /// Iterates the three series in criterion order.
    pub fn iter(&self) -> impl Iterator<Item = &SyntheticSeries> {
        [&self.typical, &self.cold_winter, &self.hot_summer].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(criterion: Criterion, fill: f64) -> SyntheticSeries {
        SyntheticSeries::new(criterion, vec![fill; 8760], [2000; 12])
    }

    #[test]
    fn series_accessors() {
        let s = series(Criterion::Typical, 1.5);
        assert_eq!(s.criterion(), Criterion::Typical);
        assert_eq!(s.values().len(), 8760);
        assert_eq!(s.source_years(), &[2000; 12]);
        assert_eq!(s.into_values().len(), 8760);
    }

    #[test]
    fn synthesis_accessors() {
        let synthesis = StationSynthesis::new(
            "A".to_string(),
            series(Criterion::Typical, 1.0),
            series(Criterion::ColdWinter, 2.0),
            series(Criterion::HotSummer, 3.0),
        );

        assert_eq!(synthesis.station(), "A");
        assert_eq!(synthesis.typical().values()[0], 1.0);
        assert_eq!(synthesis.cold_winter().values()[0], 2.0);
        assert_eq!(synthesis.hot_summer().values()[0], 3.0);

        for criterion in Criterion::ALL {
            assert_eq!(synthesis.series(criterion).criterion(), criterion);
        }

        let order: Vec<Criterion> = synthesis.iter().map(|s| s.criterion()).collect();
        assert_eq!(order, Criterion::ALL);
    }
}
