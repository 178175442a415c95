//! Validated per-station container of qualifying hourly years.

use tmy_calendar::HOURS_PER_YEAR;

use crate::error::SelectError;

/// Hourly temperature years for a single station, ascending by year.
///
/// Construction validates the shape contract: every year holds exactly
/// [`HOURS_PER_YEAR`] finite values and no year appears twice. The minimum
/// year count for synthesis is checked by [`synthesize`](crate::synthesize),
/// not here, so callers can still describe under-provisioned stations.
#[derive(Debug, Clone)]
pub struct StationYears {
    station: String,
    years: Vec<i32>,
    values: Vec<Vec<f64>>,
}

impl StationYears {
    /// Creates a new `StationYears` from `(year, hourly values)` records.
    ///
    /// Records are sorted by ascending year; input order does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::MalformedYear`] if a record does not hold
    /// exactly [`HOURS_PER_YEAR`] values, [`SelectError::NonFiniteValue`] if
    /// a record contains NaN or infinity, and [`SelectError::DuplicateYear`]
    /// if two records share a year.
    pub fn new(
        station: impl Into<String>,
        mut records: Vec<(i32, Vec<f64>)>,
    ) -> Result<Self, SelectError> {
        for (year, values) in &records {
            if values.len() != HOURS_PER_YEAR {
                return Err(SelectError::MalformedYear {
                    year: *year,
                    expected: HOURS_PER_YEAR,
                    got: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(SelectError::NonFiniteValue { year: *year });
            }
        }

        records.sort_by_key(|(year, _)| *year);
        for pair in records.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(SelectError::DuplicateYear { year: pair[0].0 });
            }
        }

        let (years, values): (Vec<i32>, Vec<Vec<f64>>) = records.into_iter().unzip();
        Ok(Self {
            station: station.into(),
            years,
            values,
        })
    }

    /// Returns the station identifier.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Returns the source years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the number of qualifying years.
    pub fn n_years(&self) -> usize {
        self.years.len()
    }

    /// Returns `true` when no years are present.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Returns the hourly values of the year at `idx`.
    pub fn values(&self, idx: usize) -> &[f64] {
        &self.values[idx]
    }

    /// Iterates `(year, hourly values)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[f64])> {
        self.years
            .iter()
            .copied()
            .zip(self.values.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_year(v: f64) -> Vec<f64> {
        vec![v; HOURS_PER_YEAR]
    }

    #[test]
    fn new_sorts_by_year() {
        let station = StationYears::new(
            "A",
            vec![(2005, flat_year(1.0)), (2001, flat_year(2.0))],
        )
        .unwrap();
        assert_eq!(station.years(), &[2001, 2005]);
        assert_eq!(station.values(0)[0], 2.0);
        assert_eq!(station.values(1)[0], 1.0);
    }

    #[test]
    fn new_rejects_wrong_length() {
        let err = StationYears::new("A", vec![(2001, vec![0.0; 8759])]).unwrap_err();
        assert_eq!(
            err,
            SelectError::MalformedYear {
                year: 2001,
                expected: HOURS_PER_YEAR,
                got: 8759,
            }
        );
    }

    #[test]
    fn new_rejects_non_finite() {
        let mut values = flat_year(1.0);
        values[100] = f64::NAN;
        let err = StationYears::new("A", vec![(2002, values)]).unwrap_err();
        assert_eq!(err, SelectError::NonFiniteValue { year: 2002 });
    }

    #[test]
    fn new_rejects_duplicate_year() {
        let err = StationYears::new(
            "A",
            vec![(2001, flat_year(1.0)), (2001, flat_year(2.0))],
        )
        .unwrap_err();
        assert_eq!(err, SelectError::DuplicateYear { year: 2001 });
    }

    #[test]
    fn accessors() {
        let station =
            StationYears::new("LYON_BRON", vec![(2001, flat_year(5.0))]).unwrap();
        assert_eq!(station.station(), "LYON_BRON");
        assert_eq!(station.n_years(), 1);
        assert!(!station.is_empty());

        let pairs: Vec<(i32, f64)> = station.iter().map(|(y, v)| (y, v[0])).collect();
        assert_eq!(pairs, vec![(2001, 5.0)]);
    }

    #[test]
    fn empty_is_valid_but_empty() {
        let station = StationYears::new("A", vec![]).unwrap();
        assert!(station.is_empty());
        assert_eq!(station.n_years(), 0);
    }
}
