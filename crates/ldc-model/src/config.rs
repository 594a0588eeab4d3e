//! Column configuration for the cleaning stages.

use serde::{Deserialize, Serialize};

pub const ORIGIN_PORT: &str = "origin_port";
pub const DESTINATION_PORT: &str = "destination_port";
pub const CARRIER: &str = "carrier";
pub const STATUS: &str = "status";
pub const DEPARTURE_DATE: &str = "departure_date";
pub const ARRIVAL_DATE: &str = "arrival_date";
pub const COST: &str = "cost";

/// How the text stage treats missing values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingText {
    /// Stringify first, so a missing value becomes the literal `"NAN"` and
    /// survives the completeness filter.
    #[default]
    Stringify,
    /// Leave missing values null; the row is later dropped.
    KeepNull,
}

/// Designated columns for each cleaning stage.
///
/// [`ColumnConfig::default`] is the logistics schema. Other schemas are only
/// built by library callers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Columns trimmed and upper-cased, in processing order.
    pub text_columns: Vec<String>,
    /// Columns parsed as calendar dates.
    pub date_columns: Vec<String>,
    /// Column parsed as a currency amount.
    pub cost_column: String,
    /// Missing-value policy of the text stage.
    pub missing_text: MissingText,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            text_columns: [ORIGIN_PORT, DESTINATION_PORT, CARRIER, STATUS]
                .map(String::from)
                .to_vec(),
            date_columns: [DEPARTURE_DATE, ARRIVAL_DATE].map(String::from).to_vec(),
            cost_column: COST.to_string(),
            missing_text: MissingText::default(),
        }
    }
}

impl ColumnConfig {
    /// Sets the missing-value policy of the text stage.
    #[must_use]
    pub fn with_missing_text(mut self, policy: MissingText) -> Self {
        self.missing_text = policy;
        self
    }

    /// Every designated column: text, then date, then cost.
    pub fn designated_columns(&self) -> impl Iterator<Item = &str> {
        self.text_columns
            .iter()
            .chain(&self.date_columns)
            .chain(std::iter::once(&self.cost_column))
            .map(String::as_str)
    }
}
