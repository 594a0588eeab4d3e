use std::path::{Path, PathBuf};

use ldc_ingest::ColumnProfile;
use ldc_model::{ColumnConfig, Record};
use ldc_transform::{PipelineReport, StageReport};
use serde::Serialize;

/// Everything a cleaning run needs besides the data itself.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    pub report: Option<PathBuf>,
    pub preview_rows: usize,
    pub columns: ColumnConfig,
}

/// First rows and per-column profile of the raw input.
#[derive(Debug, Clone)]
pub struct InputPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    pub total_rows: usize,
    pub profiles: Vec<ColumnProfile>,
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    pub pipeline: PipelineReport,
    pub report_path: Option<PathBuf>,
}

impl RunResult {
    /// Rows actually written to the output file.
    pub fn rows_written(&self) -> usize {
        if self.dry_run {
            0
        } else {
            self.pipeline.rows_out
        }
    }

    pub fn run_report(&self) -> RunReport<'_> {
        RunReport {
            input: &self.input,
            output: &self.output,
            dry_run: self.dry_run,
            rows_read: self.pipeline.rows_in,
            rows_written: self.rows_written(),
            stages: &self.pipeline.stages,
        }
    }
}

/// JSON document written by `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub dry_run: bool,
    pub rows_read: usize,
    pub rows_written: usize,
    pub stages: &'a [StageReport],
}
