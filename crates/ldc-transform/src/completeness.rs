//! Completeness filtering.

use ldc_model::{Table, Value};

use crate::error::Result;
use crate::stage::{CleaningStage, StageReport};

/// Drops every record holding a null in any column, preserving order.
///
/// Returns the table and the number of dropped rows.
pub fn drop_incomplete_rows(mut table: Table) -> (Table, usize) {
    let rows_in = table.height();
    let keep: Vec<bool> = table
        .rows()
        .iter()
        .map(|record| !record.iter().any(Value::is_null))
        .collect();
    table.retain_rows(&keep);
    let dropped = rows_in - table.height();
    (table, dropped)
}

/// Pipeline stage wrapping [`drop_incomplete_rows`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletenessFilter;

impl CleaningStage for CompletenessFilter {
    fn name(&self) -> &'static str {
        "drop_incomplete"
    }

    fn apply(&self, table: Table) -> Result<(Table, StageReport)> {
        let rows_in = table.height();
        let (table, _) = drop_incomplete_rows(table);
        let report = StageReport::new(self.name(), rows_in, table.height());
        Ok((table, report))
    }
}
