//! Text normalization.

use ldc_model::{MISSING_TEXT, MissingText, Table, Value};
use tracing::debug;

use crate::error::Result;
use crate::stage::{CleaningStage, StageReport};

/// Stringifies, trims and upper-cases one value.
///
/// Numbers and dates are stringified first. Under [`MissingText::Stringify`]
/// a null becomes the literal `"NAN"`; under [`MissingText::KeepNull`] it
/// stays null.
pub fn normalize_text(value: Value, missing: MissingText) -> Value {
    match value {
        Value::Null => match missing {
            MissingText::Stringify => Value::text(MISSING_TEXT),
            MissingText::KeepNull => Value::Null,
        },
        Value::Text(text) => Value::Text(text.trim().to_uppercase()),
        other => other
            .to_text()
            .map_or(Value::Null, |text| Value::Text(text.trim().to_uppercase())),
    }
}

/// Pipeline stage applying [`normalize_text`] to each designated column.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer<'a> {
    columns: &'a [String],
    missing: MissingText,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(columns: &'a [String], missing: MissingText) -> Self {
        Self { columns, missing }
    }
}

impl CleaningStage for TextNormalizer<'_> {
    fn name(&self) -> &'static str {
        "normalize_text"
    }

    fn apply(&self, mut table: Table) -> Result<(Table, StageReport)> {
        let mut filled = 0usize;
        for column in self.columns {
            let mut column_filled = 0usize;
            table.map_column(column, |value| {
                let was_null = value.is_null();
                let normalized = normalize_text(value, self.missing);
                if was_null && !normalized.is_null() {
                    column_filled += 1;
                }
                normalized
            })?;
            debug!(column = %column, filled = column_filled, "normalized text column");
            filled += column_filled;
        }
        let rows = table.height();
        let report = StageReport::new(self.name(), rows, rows).with_values_filled(filled);
        Ok((table, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn trims_and_upper_cases() {
        assert_eq!(
            normalize_text(Value::text("  los angeles \t"), MissingText::Stringify),
            Value::text("LOS ANGELES")
        );
        assert_eq!(
            normalize_text(Value::text("In Transit"), MissingText::KeepNull),
            Value::text("IN TRANSIT")
        );
    }

    #[test]
    fn null_follows_policy() {
        assert_eq!(
            normalize_text(Value::Null, MissingText::Stringify),
            Value::text("NAN")
        );
        assert_eq!(
            normalize_text(Value::Null, MissingText::KeepNull),
            Value::Null
        );
    }

    #[test]
    fn non_text_values_are_stringified() {
        assert_eq!(
            normalize_text(Value::Number(42.0), MissingText::Stringify),
            Value::text("42.0")
        );
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(
            normalize_text(Value::Date(date), MissingText::Stringify),
            Value::text("2023-01-05")
        );
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(
            normalize_text(Value::text("   "), MissingText::Stringify),
            Value::text("")
        );
    }

    #[test]
    fn stage_counts_filled_nulls() {
        let columns = vec!["carrier".to_string()];
        let table = Table::with_rows(
            vec!["carrier".to_string(), "notes".to_string()],
            vec![
                vec![Value::text(" msc "), Value::text(" keep ")],
                vec![Value::Null, Value::Null],
            ],
        )
        .unwrap();

        let stage = TextNormalizer::new(&columns, MissingText::Stringify);
        let (table, report) = stage.apply(table).unwrap();

        assert_eq!(table.value(0, "carrier"), Some(&Value::text("MSC")));
        assert_eq!(table.value(1, "carrier"), Some(&Value::text("NAN")));
        assert_eq!(table.value(0, "notes"), Some(&Value::text(" keep ")));
        assert_eq!(table.value(1, "notes"), Some(&Value::Null));
        assert_eq!(report.values_filled, 1);
        assert_eq!(report.rows_removed(), 0);
    }
}
