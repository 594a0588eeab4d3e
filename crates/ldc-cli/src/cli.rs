//! CLI argument definitions for the logistics cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "logistics-clean",
    version,
    about = "Clean a logistics shipment CSV",
    long_about = "Clean a logistics shipment CSV.\n\n\
                  Removes duplicate records, normalizes port, carrier and status text,\n\
                  parses departure/arrival dates and shipment cost, then drops every\n\
                  record that still has a missing value."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: CleanArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Raw shipment CSV to clean.
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Destination for the cleaned CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Run the pipeline and print the summary without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Keep missing text cells missing instead of turning them into "NAN".
    ///
    /// By default a missing port, carrier or status becomes the literal text
    /// "NAN" and survives the completeness filter. With this flag such records
    /// are dropped instead.
    #[arg(long = "keep-missing-text")]
    pub keep_missing_text: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Number of input rows shown in the preview (0 disables it).
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
