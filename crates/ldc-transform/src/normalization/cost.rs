//! Currency amount parsing.

use ldc_model::{Table, Value};
use tracing::{debug, trace};

use crate::error::Result;
use crate::stage::{CleaningStage, StageReport};

/// Strips every `$` and `,` and parses the rest as a number.
///
/// No other characters are removed, so `€100` and `100 USD` fail. Blank
/// results and `NaN` yield `None`; negative values are accepted.
pub fn parse_cost(value: &str) -> Option<f64> {
    let cleaned = value.replace(['$', ','], "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| !number.is_nan())
}

/// Converts one cell to a number value, or null when it cannot be parsed.
pub fn normalize_cost(value: Value) -> Value {
    match value {
        Value::Number(_) | Value::Null => value,
        Value::Text(text) => parse_cost(&text).into(),
        Value::Date(_) => Value::Null,
    }
}

/// Pipeline stage applying [`normalize_cost`] to the cost column.
#[derive(Debug, Clone, Copy)]
pub struct CostNormalizer<'a> {
    column: &'a str,
}

impl<'a> CostNormalizer<'a> {
    pub fn new(column: &'a str) -> Self {
        Self { column }
    }
}

impl CleaningStage for CostNormalizer<'_> {
    fn name(&self) -> &'static str {
        "normalize_cost"
    }

    fn apply(&self, mut table: Table) -> Result<(Table, StageReport)> {
        let mut nulled = 0usize;
        let mut row = 0usize;
        table.map_column(self.column, |value| {
            let raw = value.as_text().map(str::to_string);
            let was_present = !value.is_null();
            let normalized = normalize_cost(value);
            if was_present && normalized.is_null() {
                nulled += 1;
                trace!(row, column = %self.column, value = ?raw, "unparseable cost");
            }
            row += 1;
            normalized
        })?;
        debug!(column = %self.column, nulled, "normalized cost column");
        let rows = table.height();
        let report = StageReport::new(self.name(), rows, rows).with_values_nulled(nulled);
        Ok((table, report))
    }
}
