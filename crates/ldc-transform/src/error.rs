//! Error types for the cleaning pipeline.

use ldc_model::ModelError;
use thiserror::Error;

/// Fatal pipeline errors. Per-value parse failures are never reported here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A designated column is absent from the input table.
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error(transparent)]
    Model(ModelError),
}

impl From<ModelError> for TransformError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::ColumnNotFound { column } => Self::MissingColumn { column },
            other => Self::Model(other),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, TransformError>;
