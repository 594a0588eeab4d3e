//! In-memory table of records.

use crate::error::{ModelError, Result};
use crate::value::Value;

/// One row: one [`Value`] per table column, in column order.
pub type Record = Vec<Value>;

/// Ordered column names plus ordered records.
///
/// Row order is insertion order. The column set is fixed at construction;
/// operations rewrite values or drop rows but never add or remove columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from columns and rows, checking every row's width.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Record>) -> Result<Self> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a record.
    pub fn push_row(&mut self, row: Record) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of records.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column, or [`ModelError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ModelError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Value at `row` in the named column.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|record| record.get(idx))
    }

    /// Rewrites every value of the named column in place.
    ///
    /// The closure receives each value by value (the cell is left `Null`
    /// while it runs) and returns the replacement.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(Value) -> Value,
    {
        let idx = self.require_column(name)?;
        for record in &mut self.rows {
            let cell = &mut record[idx];
            *cell = f(std::mem::take(cell));
        }
        Ok(())
    }

    /// Keeps the rows whose mask entry is `true`, preserving order.
    ///
    /// Rows beyond the end of the mask are kept.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        let mut mask = keep.iter().copied();
        self.rows.retain(|_| mask.next().unwrap_or(true));
    }

    /// First `n` records.
    pub fn head(&self, n: usize) -> &[Record] {
        &self.rows[..n.min(self.rows.len())]
    }
}
