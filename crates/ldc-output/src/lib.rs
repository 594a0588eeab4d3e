//! Output generation for cleaned tables.
//!
//! Tables are written as comma-separated text with the header row first.
//! Values render as the model displays them: text verbatim, dates as
//! `YYYY-MM-DD`, numbers via [`ldc_model::format_number`].

mod csv_writer;
mod error;

pub use csv_writer::{write_csv_table, write_csv_to_writer};
pub use error::{OutputError, Result};
