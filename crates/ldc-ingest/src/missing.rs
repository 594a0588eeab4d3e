//! Missing-value markers recognised while loading.

use ldc_model::Value;

/// Cell contents that load as `Null`, besides the empty string.
///
/// Matching is exact and case-sensitive on the untrimmed cell, so `" NA"`
/// stays text.
pub const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if the raw cell denotes a missing value.
pub fn is_missing_marker(raw: &str) -> bool {
    raw.is_empty() || NA_MARKERS.contains(&raw)
}

/// Converts one raw CSV field into a cell value.
pub fn parse_cell(raw: &str) -> Value {
    if is_missing_marker(raw) {
        Value::Null
    } else {
        Value::text(raw)
    }
}
