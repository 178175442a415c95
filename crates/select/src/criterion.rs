//! Selection criteria and the per-month rule table.

use std::fmt;

/// Months driven by the cold-winter override.
const WINTER_MONTHS: [u8; 3] = [12, 1, 2];

/// Months driven by the hot-summer override.
const SUMMER_MONTHS: [u8; 3] = [6, 7, 8];

/// Flavour of synthetic year to build for a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Median-representative climate for every month.
    Typical,
    /// Coldest observed winter months, typical everywhere else.
    ColdWinter,
    /// Hottest observed summer months, typical everywhere else.
    HotSummer,
}

/// How a criterion picks a source year from a month's across-year means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// The year whose mean is nearest the median of the means.
    MedianNearest,
    /// The year with the smallest mean.
    Coldest,
    /// The year with the largest mean.
    Hottest,
}

impl Criterion {
    /// All criteria, in output order.
    pub const ALL: [Criterion; 3] = [
        Criterion::Typical,
        Criterion::ColdWinter,
        Criterion::HotSummer,
    ];

    /// Returns the rule this criterion applies in `month` (1..=12).
    ///
    /// Only the winter months deviate for [`Criterion::ColdWinter`] and only
    /// the summer months for [`Criterion::HotSummer`]; every other month
    /// falls back to the typical rule.
    pub(crate) fn rule_for(self, month: u8) -> Rule {
        match self {
            Criterion::Typical => Rule::MedianNearest,
            Criterion::ColdWinter if WINTER_MONTHS.contains(&month) => Rule::Coldest,
            Criterion::HotSummer if SUMMER_MONTHS.contains(&month) => Rule::Hottest,
            Criterion::ColdWinter | Criterion::HotSummer => Rule::MedianNearest,
        }
    }

    /// Returns the snake_case tag used in file names and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Typical => "typical",
            Criterion::ColdWinter => "cold_winter",
            Criterion::HotSummer => "hot_summer",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
