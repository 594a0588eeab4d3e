//! Exact-duplicate removal.

use std::collections::HashSet;

use ldc_model::{Record, Table};

use crate::error::Result;
use crate::stage::{CleaningStage, StageReport};

/// Drops records whose every value equals an earlier record's.
///
/// Null compares equal to null here. Returns the table and the number of
/// removed rows; survivors keep their relative order.
pub fn dedupe_rows(mut table: Table) -> (Table, usize) {
    let rows_in = table.height();
    let keep: Vec<bool> = {
        let mut seen: HashSet<&Record> = HashSet::with_capacity(rows_in);
        table.rows().iter().map(|record| seen.insert(record)).collect()
    };
    table.retain_rows(&keep);
    let removed = rows_in - table.height();
    (table, removed)
}

/// Pipeline stage wrapping [`dedupe_rows`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Deduplicator;

impl CleaningStage for Deduplicator {
    fn name(&self) -> &'static str {
        "dedupe"
    }

    fn apply(&self, table: Table) -> Result<(Table, StageReport)> {
        let rows_in = table.height();
        let (table, _) = dedupe_rows(table);
        let report = StageReport::new(self.name(), rows_in, table.height());
        Ok((table, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldc_model::Value;

    fn table(rows: Vec<Vec<Value>>) -> Table {
        Table::with_rows(vec!["a".to_string(), "b".to_string()], rows).unwrap()
    }

    #[test]
    fn keeps_first_occurrence() {
        let input = table(vec![
            vec![Value::text("x"), Value::text("1")],
            vec![Value::text("y"), Value::text("2")],
            vec![Value::text("x"), Value::text("1")],
            vec![Value::text("y"), Value::text("3")],
        ]);
        let (output, removed) = dedupe_rows(input);
        assert_eq!(removed, 1);
        assert_eq!(
            output.rows(),
            [
                vec![Value::text("x"), Value::text("1")],
                vec![Value::text("y"), Value::text("2")],
                vec![Value::text("y"), Value::text("3")],
            ]
        );
    }

    #[test]
    fn null_matches_null() {
        let input = table(vec![
            vec![Value::Null, Value::text("1")],
            vec![Value::Null, Value::text("1")],
            vec![Value::text(""), Value::text("1")],
        ]);
        let (output, removed) = dedupe_rows(input);
        assert_eq!(removed, 1);
        assert_eq!(output.height(), 2);
    }

    #[test]
    fn whitespace_differences_are_distinct() {
        let input = table(vec![
            vec![Value::text(" la "), Value::text("1")],
            vec![Value::text("la"), Value::text("1")],
        ]);
        let (_, removed) = dedupe_rows(input);
        assert_eq!(removed, 0);
    }

    #[test]
    fn empty_table_is_unchanged() {
        let (output, removed) = dedupe_rows(table(Vec::new()));
        assert_eq!(removed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn stage_reports_rows() {
        let input = table(vec![
            vec![Value::text("x"), Value::Null],
            vec![Value::text("x"), Value::Null],
        ]);
        let (_, report) = Deduplicator.apply(input).unwrap();
        assert_eq!(report.stage, "dedupe");
        assert_eq!(report.rows_in, 2);
        assert_eq!(report.rows_out, 1);
        assert_eq!(report.rows_removed(), 1);
    }
}
