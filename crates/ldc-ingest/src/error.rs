//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The file is not well-formed delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A data row has more fields than the header.
    #[error("{path} line {line}: expected {expected} fields, saw {found}")]
    RowTooWide {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    // === Table Errors ===
    #[error(transparent)]
    Model(#[from] ldc_model::ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/shipments.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/shipments.csv");

        let err = IngestError::RowTooWide {
            path: PathBuf::from("shipments.csv"),
            line: 4,
            expected: 7,
            found: 8,
        };
        assert_eq!(
            err.to_string(),
            "shipments.csv line 4: expected 7 fields, saw 8"
        );
    }
}
