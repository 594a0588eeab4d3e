use anyhow::Result;
use ldc_model::{ColumnConfig, MissingText};

use ldc_cli::pipeline::run;
use ldc_cli::types::{RunOptions, RunResult};

use crate::cli::CleanArgs;
use crate::summary::print_preview;

pub fn run_clean(args: &CleanArgs) -> Result<RunResult> {
    let options = RunOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
        report: args.report.clone(),
        preview_rows: args.preview_rows,
        columns: column_config(args),
    };
    run(&options, print_preview)
}

fn column_config(args: &CleanArgs) -> ColumnConfig {
    let policy = if args.keep_missing_text {
        MissingText::KeepNull
    } else {
        MissingText::Stringify
    };
    ColumnConfig::default().with_missing_text(policy)
}
