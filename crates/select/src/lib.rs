//! Month-wise source-year selection for the TMY generator.
//!
//! Given a station's qualifying hourly-temperature years, this crate picks,
//! for each calendar month, the historical occurrence that best represents a
//! typical climate, a cold winter and a hot summer, then splices the chosen
//! months into three continuous 8760-hour synthetic years.
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐     ┌─────────────────┐     ┌────────────────┐
//!  │ StationYears  │────▶│  Month windows   │────▶│   Splicing     │
//!  │ (validated)   │     │ (rule per month) │     │ (values+years) │
//!  └───────────────┘     └─────────────────┘     └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use tmy_select::{SelectConfig, StationYears, synthesize};
//!
//! let station = StationYears::new("LYON_BRON", records)?;
//! let config = SelectConfig::new();
//! let synthesis = synthesize(&station, &config)?;
//! assert_eq!(synthesis.typical().values().len(), 8760);
//! ```

mod config;
mod criterion;
mod error;
mod result;
mod select;
mod station;

pub use config::SelectConfig;
pub use criterion::Criterion;
pub use error::SelectError;
pub use result::{StationSynthesis, SyntheticSeries};
pub use select::synthesize;
pub use station::StationYears;
