//! Cleaning pipeline for logistics shipment tables.
//!
//! The pipeline is a fixed, strictly sequential list of stages. Each stage
//! takes ownership of the [`Table`](ldc_model::Table) produced by the
//! previous one and hands back the transformed table with a
//! [`StageReport`]:
//!
//! 1. [`Deduplicator`]: drop exact duplicate records, first occurrence wins
//! 2. [`TextNormalizer`]: trim and upper-case the text columns
//! 3. [`DateNormalizer`]: parse the date columns into calendar dates
//! 4. [`CostNormalizer`]: strip `$` and `,` and parse the cost column
//! 5. [`CompletenessFilter`]: drop every record that still holds a null
//!
//! Unparseable cells never raise; they become null and the owning record is
//! dropped by the last stage. The only fatal condition is a designated
//! column missing from the input.
//!
//! # Example
//!
//! ```ignore
//! use ldc_model::ColumnConfig;
//! use ldc_transform::clean_table;
//!
//! let outcome = clean_table(raw, &ColumnConfig::default())?;
//! println!("{} duplicates removed", outcome.report.duplicates_removed());
//! ```

pub mod completeness;
pub mod dedupe;
pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod stage;

pub use completeness::{CompletenessFilter, drop_incomplete_rows};
pub use dedupe::{Deduplicator, dedupe_rows};
pub use error::{Result, TransformError};
pub use normalization::{
    CostNormalizer, DateNormalizer, TextNormalizer, normalize_text, parse_cost, parse_date,
};
pub use pipeline::{PipelineOutcome, PipelineReport, check_required_columns, clean_table};
pub use stage::{CleaningStage, StageReport};
