//! CSV header normalization.

use std::collections::{HashMap, HashSet};

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Normalizes raw header cells into unique column names.
///
/// - Strips a UTF-8 BOM and surrounding whitespace
/// - Names a blank header `Unnamed: <index>`
/// - Suffixes repeated names with `.1`, `.2`, ... in order of appearance
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::new();

    for (idx, cell) in raw.into_iter().enumerate() {
        let mut name = normalize_header(cell);
        if name.is_empty() {
            name = format!("Unnamed: {idx}");
        }
        if used.contains(&name) {
            let counter = counters.entry(name.clone()).or_insert(0);
            let mut candidate;
            loop {
                *counter += 1;
                candidate = format!("{name}.{counter}");
                if !used.contains(&candidate) {
                    break;
                }
            }
            name = candidate;
        }
        used.insert(name.clone());
        columns.push(name);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_whitespace() {
        let headers = normalize_headers(["\u{feff}origin_port", " cost "]);
        assert_eq!(headers, vec!["origin_port", "cost"]);
    }

    #[test]
    fn names_blank_headers() {
        let headers = normalize_headers(["a", "", "  "]);
        assert_eq!(headers, vec!["a", "Unnamed: 1", "Unnamed: 2"]);
    }

    #[test]
    fn suffixes_repeated_headers() {
        let headers = normalize_headers(["cost", "cost", "cost.1", "cost"]);
        assert_eq!(headers, vec!["cost", "cost.1", "cost.1.1", "cost.2"]);
    }
}
