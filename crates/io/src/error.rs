//! Error types for tmy-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the tmy-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file or directory does not exist on disk.
    #[error("not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a record is missing the requested column.
    #[error("column {column} missing in {}", path.display())]
    MissingColumn {
        /// 0-based index of the requested column.
        column: usize,
        /// Path to the file being read.
        path: PathBuf,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing"),
        };
        assert_eq!(err.to_string(), "not found: /tmp/missing");
    }

    #[test]
    fn display_io() {
        let err = IoError::Io {
            reason: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "io error: permission denied");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: bad quote");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            column: 2,
            path: PathBuf::from("/data/a.csv"),
        };
        assert_eq!(err.to_string(), "column 2 missing in /data/a.csv");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::other("boom");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::Io { .. }));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
