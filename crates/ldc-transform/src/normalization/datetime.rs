//! Calendar date parsing.
//!
//! Dates arrive in whatever shape the source system exported. Rather than
//! depending on the host locale, parsing walks a fixed list of formats and
//! keeps the first match:
//!
//! 1. ISO 8601 date (`2024-01-15`)
//! 2. ISO 8601 / RFC 3339 date-times; the written calendar date is kept
//! 3. Numeric forms, month-first before day-first (`01/15/2024` is January,
//!    `15/01/2024` falls through to day-first)
//! 4. Month-name forms (`15-Jan-2024`, `January 15, 2024`)
//! 5. Any of the above followed by a time of day
//!
//! Dates outside 1677-09-21..=2262-04-11 are rejected, matching the range a
//! nanosecond timestamp can represent in the tools that produce these files.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ldc_model::{Table, Value};
use tracing::{debug, trace};

use crate::error::Result;
use crate::stage::{CleaningStage, StageReport};

/// Date-only formats tried after ISO 8601, in priority order.
pub const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",  // 2024/01/15
    "%m/%d/%y",  // 01/15/24
    "%m/%d/%Y",  // 01/15/2024
    "%d/%m/%Y",  // 15/01/2024
    "%d/%m/%y",  // 15/01/24
    "%m-%d-%Y",  // 01-15-2024
    "%d-%m-%Y",  // 15-01-2024
    "%d.%m.%Y",  // 15.01.2024
    "%Y%m%d",    // 20240115
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y-%b-%d",  // 2024-Jan-15
];

const ISO_DATE: &str = "%Y-%m-%d";

const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_SUFFIXES: &[&str] = &[" %H:%M:%S", " %H:%M"];

fn min_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1677, 9, 21)
}

fn max_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2262, 4, 11)
}

fn in_range(date: NaiveDate) -> bool {
    matches!((min_date(), max_date()), (Some(min), Some(max)) if (min..=max).contains(&date))
}

/// Parses a value as a calendar date, dropping any time of day.
///
/// Returns `None` for blank input, unknown formats, invalid calendar dates
/// such as `2023-02-30`, and dates outside the supported range. A format
/// that matches with an out-of-range year (`1/5/23` read as year 1) does not
/// stop the search.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_only = |fmt: &str| {
        NaiveDate::parse_from_str(trimmed, fmt)
            .ok()
            .filter(|date| in_range(*date))
    };
    let date_time = |fmt: &str| {
        NaiveDateTime::parse_from_str(trimmed, fmt)
            .ok()
            .map(|dt| dt.date())
            .filter(|date| in_range(*date))
    };

    if let Some(date) = date_only(ISO_DATE) {
        return Some(date);
    }
    if let Some(date) = DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
        .filter(|date| in_range(*date))
    {
        return Some(date);
    }
    if let Some(date) = ISO_DATETIME_FORMATS.iter().find_map(|fmt| date_time(*fmt)) {
        return Some(date);
    }
    if let Some(date) = DATE_FORMATS.iter().find_map(|fmt| date_only(*fmt)) {
        return Some(date);
    }
    DATE_FORMATS.iter().find_map(|fmt| {
        TIME_SUFFIXES
            .iter()
            .find_map(|suffix| date_time(format!("{fmt}{suffix}").as_str()))
    })
}

/// Converts one cell to a date value, or null when it cannot be parsed.
pub fn normalize_date(value: Value) -> Value {
    match value {
        Value::Date(_) | Value::Null => value,
        Value::Text(text) => parse_date(&text).into(),
        Value::Number(_) => value
            .to_text()
            .and_then(|text| parse_date(&text))
            .into(),
    }
}

/// Pipeline stage applying [`normalize_date`] to each designated column.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer<'a> {
    columns: &'a [String],
}

impl<'a> DateNormalizer<'a> {
    pub fn new(columns: &'a [String]) -> Self {
        Self { columns }
    }
}

impl CleaningStage for DateNormalizer<'_> {
    fn name(&self) -> &'static str {
        "normalize_dates"
    }

    fn apply(&self, mut table: Table) -> Result<(Table, StageReport)> {
        let mut nulled = 0usize;
        for column in self.columns {
            let mut column_nulled = 0usize;
            let mut row = 0usize;
            table.map_column(column, |value| {
                let was_present = !value.is_null();
                let raw = if was_present { value.to_text() } else { None };
                let normalized = normalize_date(value);
                if was_present && normalized.is_null() {
                    column_nulled += 1;
                    trace!(row, column = %column, value = ?raw, "unparseable date");
                }
                row += 1;
                normalized
            })?;
            debug!(column = %column, nulled = column_nulled, "normalized date column");
            nulled += column_nulled;
        }
        let rows = table.height();
        let report = StageReport::new(self.name(), rows, rows).with_values_nulled(nulled);
        Ok((table, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_date("2023-01-15"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("  2023-01-15 "), Some(ymd(2023, 1, 15)));
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert_eq!(parse_date("2023-02-30"), None);
        assert_eq!(parse_date("2023-13-01"), None);
        assert_eq!(parse_date("02/30/2023"), None);
    }

    #[test]
    fn test_datetimes_keep_written_date() {
        assert_eq!(parse_date("2023-01-15T23:30:00"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("2023-01-15 08:00"), Some(ymd(2023, 1, 15)));
        assert_eq!(
            parse_date("2023-01-15T23:30:00-05:00"),
            Some(ymd(2023, 1, 15))
        );
        assert_eq!(parse_date("2023-01-15T10:30:45.123"), Some(ymd(2023, 1, 15)));
    }

    #[test]
    fn test_month_first_before_day_first() {
        assert_eq!(parse_date("01/02/2023"), Some(ymd(2023, 1, 2)));
        assert_eq!(parse_date("15/01/2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("1/5/23"), Some(ymd(2023, 1, 5)));
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(parse_date("01/15/24"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("15/01/24"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("02/30/24"), None);
    }

    #[test]
    fn test_other_formats() {
        assert_eq!(parse_date("2023/01/15"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("15.01.2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("20230115"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("15-Jan-2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("January 15, 2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("15 January 2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("01/15/2023 14:45"), Some(ymd(2023, 1, 15)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2023-01"), None);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_date("1500-01-01"), None);
        assert_eq!(parse_date("2300-01-01"), None);
        assert_eq!(parse_date("2262-04-11"), Some(ymd(2262, 4, 11)));
    }

    #[test]
    fn test_normalize_date_values() {
        let date = ymd(2023, 1, 5);
        assert_eq!(normalize_date(Value::text("2023-01-05")), Value::Date(date));
        assert_eq!(normalize_date(Value::Date(date)), Value::Date(date));
        assert_eq!(normalize_date(Value::text("soon")), Value::Null);
        assert_eq!(normalize_date(Value::Null), Value::Null);
    }
}
