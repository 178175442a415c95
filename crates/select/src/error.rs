//! Error types for the tmy-select crate.

/// Error type for all fallible operations in the tmy-select crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectError {
    /// Returned when a year's hourly record has the wrong length.
    #[error("year {year}: expected {expected} hourly values, got {got}")]
    MalformedYear {
        /// The offending source year.
        year: i32,
        /// Expected number of hourly values.
        expected: usize,
        /// Actual number of hourly values.
        got: usize,
    },

    /// Returned when a year's hourly record contains NaN or infinity.
    #[error("non-finite value in year {year}")]
    NonFiniteValue {
        /// The offending source year.
        year: i32,
    },

    /// Returned when the same source year appears twice.
    #[error("duplicate year {year}")]
    DuplicateYear {
        /// The duplicated source year.
        year: i32,
    },

    /// Returned when a station has too few qualifying years.
    #[error("insufficient history: got {n} qualifying years, need at least {min}")]
    InsufficientHistory {
        /// Number of qualifying years.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
