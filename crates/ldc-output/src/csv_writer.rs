//! CSV serialization.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use ldc_model::Table;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{OutputError, Result};

/// Writes the table to `path`.
///
/// The content is staged in a temporary file next to `path` and renamed
/// into place, so a failure never leaves a partial file behind. Missing
/// parent directories are created.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let staging = NamedTempFile::new_in(parent).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut staging = write_csv_to_writer(staging, table).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    staging.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    staging.persist(path).map_err(|err| OutputError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote cleaned table"
    );
    Ok(())
}

/// Serializes the table into `writer` and hands the writer back.
pub fn write_csv_to_writer<W: Write>(writer: W, table: &Table) -> csv::Result<W> {
    let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);
    out.write_record(table.columns())?;
    for record in table.rows() {
        out.write_record(record.iter().map(ToString::to_string))?;
    }
    out.into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
