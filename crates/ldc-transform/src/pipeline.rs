//! Pipeline driver.
//!
//! Applies the cleaning stages in their fixed order:
//!
//! 1. **Dedupe**: drop exact duplicate records
//! 2. **Text**: trim and upper-case the text columns
//! 3. **Dates**: parse the date columns
//! 4. **Cost**: parse the cost column
//! 5. **Completeness**: drop records still holding a null
//!
//! The designated columns are checked before the first stage runs, so a
//! missing column fails the run without any partial transformation.

use std::time::Instant;

use ldc_model::{ColumnConfig, Table};
use serde::Serialize;
use tracing::{info, info_span};

use crate::completeness::CompletenessFilter;
use crate::dedupe::Deduplicator;
use crate::error::{Result, TransformError};
use crate::normalization::{CostNormalizer, DateNormalizer, TextNormalizer};
use crate::stage::{CleaningStage, StageReport};

/// Counts for a whole pipeline run, one entry per stage in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub stages: Vec<StageReport>,
}

impl PipelineReport {
    /// Report of the stage with the given name.
    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == name)
    }

    /// Rows removed by the deduplication stage.
    pub fn duplicates_removed(&self) -> usize {
        self.stage(Deduplicator.name())
            .map_or(0, StageReport::rows_removed)
    }

    /// Rows removed by the completeness filter.
    pub fn incomplete_removed(&self) -> usize {
        self.stage(CompletenessFilter.name())
            .map_or(0, StageReport::rows_removed)
    }
}

/// Final table plus the run report.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub table: Table,
    pub report: PipelineReport,
}

/// Fails with [`TransformError::MissingColumn`] for the first designated
/// column absent from the table.
pub fn check_required_columns(table: &Table, config: &ColumnConfig) -> Result<()> {
    match config
        .designated_columns()
        .find(|column| !table.has_column(column))
    {
        Some(column) => Err(TransformError::MissingColumn {
            column: column.to_string(),
        }),
        None => Ok(()),
    }
}

/// Runs the full cleaning pipeline.
///
/// # Errors
///
/// Returns [`TransformError::MissingColumn`] if the table lacks a designated
/// column. Unparseable values never fail the run.
pub fn clean_table(table: Table, config: &ColumnConfig) -> Result<PipelineOutcome> {
    let span = info_span!("clean", rows = table.height(), columns = table.width());
    let _guard = span.enter();
    let start = Instant::now();

    check_required_columns(&table, config)?;

    let text = TextNormalizer::new(&config.text_columns, config.missing_text);
    let dates = DateNormalizer::new(&config.date_columns);
    let cost = CostNormalizer::new(&config.cost_column);
    let stages: [&dyn CleaningStage; 5] =
        [&Deduplicator, &text, &dates, &cost, &CompletenessFilter];

    let rows_in = table.height();
    let mut table = table;
    let mut reports = Vec::with_capacity(stages.len());
    for stage in stages {
        table = run_stage(stage, table, &mut reports)?;
    }

    let report = PipelineReport {
        rows_in,
        rows_out: table.height(),
        stages: reports,
    };
    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        duplicates_removed = report.duplicates_removed(),
        incomplete_removed = report.incomplete_removed(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    Ok(PipelineOutcome { table, report })
}

fn run_stage(
    stage: &dyn CleaningStage,
    table: Table,
    reports: &mut Vec<StageReport>,
) -> Result<Table> {
    let span = info_span!("stage", name = stage.name());
    let _guard = span.enter();
    let start = Instant::now();

    let (table, report) = stage.apply(table)?;
    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        removed = report.rows_removed(),
        values_nulled = report.values_nulled,
        values_filled = report.values_filled,
        duration_ms = start.elapsed().as_millis(),
        "stage complete"
    );
    reports.push(report);
    Ok(table)
}
