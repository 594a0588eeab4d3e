//! Logistics data ingestion utilities.
//!
//! This crate loads the raw shipment CSV into an [`ldc_model::Table`].
//!
//! # Features
//!
//! - **CSV Loading**: first row is the header, every other row a record
//! - **Missing Values**: empty cells and standard NA markers become `Null`
//! - **Header Repair**: blank and repeated header names are made unique
//! - **Column Profiles**: per-column null and distinct counts for previews
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ldc_ingest::{build_column_profiles, read_csv_table};
//!
//! let table = read_csv_table(Path::new("data/shipments.csv"))?;
//! for profile in build_column_profiles(&table) {
//!     println!("{}: {} non-null", profile.name, profile.non_null);
//! }
//! ```

mod error;
mod header;
mod missing;
mod profile;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use header::normalize_headers;
pub use reader::{read_csv_table, read_csv_table_from_reader};

// === Missing Values ===
pub use missing::{NA_MARKERS, is_missing_marker, parse_cell};

// === Column Profiles ===
pub use profile::{ColumnProfile, build_column_profiles};
