//! Run steps shared by the binary and the integration tests.
//!
//! Each step wraps one library crate and attaches the file or column context
//! that makes the `anyhow` chain readable at the top level.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ldc_ingest::{build_column_profiles, read_csv_table};
use ldc_model::{ColumnConfig, Table};
use ldc_output::write_csv_table;
use ldc_transform::{PipelineOutcome, clean_table};
use tracing::{info, info_span, warn};

use crate::types::{InputPreview, RunOptions, RunResult};

/// Runs read, clean, report and write in order.
///
/// `on_preview` sees the raw input before cleaning starts. Nothing is
/// written unless cleaning succeeds, and the output is skipped on a dry run.
/// The report is written before the output and removed again if the output
/// cannot be written, so a failed run leaves neither file behind.
pub fn run<F>(options: &RunOptions, on_preview: F) -> Result<RunResult>
where
    F: FnOnce(&InputPreview),
{
    let span = info_span!("run", input = %options.input.display());
    let _guard = span.enter();

    let table = ingest(&options.input)?;
    on_preview(&preview(&table, options.preview_rows));

    let PipelineOutcome {
        table: cleaned,
        report,
    } = clean(table, &options.columns)?;
    let result = RunResult {
        input: options.input.clone(),
        output: options.output.clone(),
        dry_run: options.dry_run,
        pipeline: report,
        report_path: options.report.clone(),
    };
    if let Some(path) = &result.report_path {
        write_run_report(path, &result)?;
    }

    if options.dry_run {
        info!(rows = cleaned.height(), "dry run, output not written");
    } else if let Err(err) = output(&options.output, &cleaned) {
        if let Some(path) = &result.report_path {
            discard_report(path);
        }
        return Err(err);
    }
    Ok(result)
}

fn discard_report(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %err, "failed to remove run report");
    }
}

pub fn ingest(path: &Path) -> Result<Table> {
    read_csv_table(path).with_context(|| format!("read input {}", path.display()))
}

pub fn preview(table: &Table, rows: usize) -> InputPreview {
    InputPreview {
        columns: table.columns().to_vec(),
        rows: table.head(rows).to_vec(),
        total_rows: table.height(),
        profiles: build_column_profiles(table),
    }
}

pub fn clean(table: Table, columns: &ColumnConfig) -> Result<PipelineOutcome> {
    clean_table(table, columns).context("clean table")
}

pub fn output(path: &Path, table: &Table) -> Result<()> {
    write_csv_table(path, table).with_context(|| format!("write output {}", path.display()))
}

/// Writes the run report as pretty JSON.
pub fn write_run_report(path: &Path, result: &RunResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&result.run_report()).context("serialize run report")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
