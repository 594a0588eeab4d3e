//! Core data model for the logistics data cleaner.
//!
//! This crate defines the in-memory representation shared by every other
//! crate in the workspace:
//!
//! - [`Value`]: a typed cell (`Null`, text, calendar date or number)
//! - [`Table`]: ordered column names plus ordered records
//! - [`ColumnConfig`]: which columns each cleaning stage operates on
//!
//! The model carries no I/O. Reading and writing tables lives in
//! `ldc-ingest` and `ldc-output`; the cleaning stages live in `ldc-transform`.

pub mod config;
pub mod error;
pub mod table;
pub mod value;

pub use config::{
    ARRIVAL_DATE, CARRIER, COST, ColumnConfig, DEPARTURE_DATE, DESTINATION_PORT, MissingText,
    ORIGIN_PORT, STATUS,
};
pub use error::{ModelError, Result};
pub use table::{Record, Table};
pub use value::{MISSING_TEXT, Value, format_number};
