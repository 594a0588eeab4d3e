//! Stage trait and per-stage reporting.
//!
//! Every cleaning step implements [`CleaningStage`]. A stage consumes the
//! incoming table and returns the outgoing one, so ownership moves through
//! the pipeline and no two stages ever see the same table.

use ldc_model::Table;
use serde::Serialize;

use crate::error::Result;

/// A single step of the cleaning pipeline.
///
/// # Example
///
/// ```ignore
/// struct DropEverything;
///
/// impl CleaningStage for DropEverything {
///     fn name(&self) -> &'static str {
///         "drop_everything"
///     }
///
///     fn apply(&self, mut table: Table) -> Result<(Table, StageReport)> {
///         let rows_in = table.height();
///         table.retain_rows(&vec![false; rows_in]);
///         Ok((table, StageReport::new(self.name(), rows_in, 0)))
///     }
/// }
/// ```
pub trait CleaningStage {
    /// Stable identifier used in logs and reports (e.g. `"dedupe"`).
    fn name(&self) -> &'static str;

    /// Transforms the table.
    ///
    /// # Errors
    ///
    /// Returns an error only when a column the stage operates on is absent.
    fn apply(&self, table: Table) -> Result<(Table, StageReport)>;
}

/// Row and value counts for one stage run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: &'static str,
    pub rows_in: usize,
    pub rows_out: usize,
    /// Present values the stage could not parse and replaced with null.
    pub values_nulled: usize,
    /// Null values the stage replaced with a present value.
    pub values_filled: usize,
}

impl StageReport {
    pub fn new(stage: &'static str, rows_in: usize, rows_out: usize) -> Self {
        Self {
            stage,
            rows_in,
            rows_out,
            values_nulled: 0,
            values_filled: 0,
        }
    }

    #[must_use]
    pub fn with_values_nulled(mut self, count: usize) -> Self {
        self.values_nulled = count;
        self
    }

    #[must_use]
    pub fn with_values_filled(mut self, count: usize) -> Self {
        self.values_filled = count;
        self
    }

    /// Rows dropped by the stage.
    pub fn rows_removed(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}
