//! Error types for table operations.

use thiserror::Error;

/// Errors raised by [`Table`](crate::Table) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A column was looked up by name but the table has no such column.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// A record does not have one value per column.
    #[error("record {row} has {found} values but the table has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::ColumnNotFound {
            column: "cost".to_string(),
        };
        assert_eq!(err.to_string(), "column 'cost' not found in table");

        let err = ModelError::RowWidth {
            row: 3,
            expected: 7,
            found: 6,
        };
        assert_eq!(
            err.to_string(),
            "record 3 has 6 values but the table has 7 columns"
        );
    }
}
