//! Column profiles for the input preview.

use std::collections::HashSet;

use ldc_model::{Table, Value};

/// Summary statistics for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: String,
    pub non_null: usize,
    pub nulls: usize,
    /// Number of distinct present values.
    pub distinct: usize,
    /// True when the column has present values and all of them parse as numbers.
    pub is_numeric: bool,
}

/// Builds one profile per column, in column order.
pub fn build_column_profiles(table: &Table) -> Vec<ColumnProfile> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| profile_column(table, idx, name))
        .collect()
}

fn profile_column(table: &Table, idx: usize, name: &str) -> ColumnProfile {
    let mut non_null = 0usize;
    let mut numeric = 0usize;
    let mut distinct: HashSet<&Value> = HashSet::new();

    for record in table.rows() {
        let value = &record[idx];
        if value.is_null() {
            continue;
        }
        non_null += 1;
        distinct.insert(value);
        let is_number = match value {
            Value::Number(_) => true,
            Value::Text(text) => text.trim().parse::<f64>().is_ok(),
            _ => false,
        };
        if is_number {
            numeric += 1;
        }
    }

    ColumnProfile {
        name: name.to_string(),
        non_null,
        nulls: table.height() - non_null,
        distinct: distinct.len(),
        is_numeric: non_null > 0 && numeric == non_null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_follow_column_order() {
        let table = Table::with_rows(
            vec!["carrier".to_string(), "cost".to_string()],
            vec![
                vec![Value::text("maersk"), Value::text("10")],
                vec![Value::text("maersk"), Value::Null],
                vec![Value::Null, Value::text("12.5")],
            ],
        )
        .unwrap();

        let profiles = build_column_profiles(&table);
        assert_eq!(
            profiles,
            vec![
                ColumnProfile {
                    name: "carrier".to_string(),
                    non_null: 2,
                    nulls: 1,
                    distinct: 1,
                    is_numeric: false,
                },
                ColumnProfile {
                    name: "cost".to_string(),
                    non_null: 2,
                    nulls: 1,
                    distinct: 2,
                    is_numeric: true,
                },
            ]
        );
    }
}
