//! CSV file reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use ldc_model::{Table, Value};
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::header::normalize_headers;
use crate::missing::parse_cell;

/// Reads a comma-separated file into a [`Table`].
///
/// The first row supplies the column names; every following non-blank line
/// is a record. Missing cells become `Null`, every other cell is kept
/// verbatim as text.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let table = read_csv_table_from_reader(BufReader::new(file), path)?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded input table"
    );
    Ok(table)
}

/// Reads CSV content from any reader. `path` is only used in error messages.
pub fn read_csv_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let parse_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers = reader.headers().map_err(parse_error)?.clone();
    if raw_headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns = normalize_headers(raw_headers.iter());
    let width = columns.len();
    debug!(columns = ?columns, "parsed header row");

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.len() > width {
            return Err(IngestError::RowTooWide {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: width,
                found: record.len(),
            });
        }
        let mut row: Vec<Value> = record.iter().map(parse_cell).collect();
        row.resize(width, Value::Null);
        table.push_row(row)?;
    }

    Ok(table)
}
