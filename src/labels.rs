//! Parenthetical label mining.
//!
//! Collects strict `(Xxx)` labels from every string in a JSON document and
//! keeps the ones that recur often enough to be classification tags rather
//! than noise.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    // One capital, then 1-10 of lowercase / '.' / 'ö': (Bot.), (Zoöl.), (Naut.)
    // Digits, spaces and hyphens never match.
    static ref LABEL_PATTERN: Regex = Regex::new(r"\([A-Z][a-z.ö]{1,10}\)").unwrap();
}

/// Labels seen fewer times than this are dropped as one-off noise.
pub const MIN_LABEL_COUNT: usize = 2;

/// Labels must be longer than this (parentheses included) to be kept.
pub const MIN_LABEL_LEN: usize = 3;

/// Minimum width of the label column in the printed report.
pub const LABEL_COLUMN_WIDTH: usize = 15;

/// A mined label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Every label match in `value`, depth-first, duplicates included.
pub fn extract_labels(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_labels(value, &mut found);
    found
}

fn collect_labels(value: &Value, found: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                collect_labels(child, found);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_labels(child, found);
            }
        }
        Value::String(text) => {
            found.extend(LABEL_PATTERN.find_iter(text).map(|m| m.as_str().to_string()));
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Tally labels, keep the frequent ones, most frequent first.
///
/// Equal counts stay in first-seen order.
pub fn count_and_filter<I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = String>,
{
    let mut tally: Vec<LabelCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for label in labels {
        match positions.get(&label) {
            Some(&index) => tally[index].count += 1,
            None => {
                positions.insert(label.clone(), tally.len());
                tally.push(LabelCount { label, count: 1 });
            }
        }
    }

    tally.retain(|entry| {
        entry.count >= MIN_LABEL_COUNT && entry.label.chars().count() > MIN_LABEL_LEN
    });
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// Extract and filter in one pass over `value`.
pub fn mine_labels(value: &Value) -> Vec<LabelCount> {
    count_and_filter(extract_labels(value))
}

/// Render the label report: a header with the number of distinct labels,
/// then one line per label.
pub fn render_report(labels: &[LabelCount]) -> String {
    let mut lines = vec![format!("--- Distinct labels ({}) ---", labels.len())];
    lines.extend(labels.iter().map(|entry| {
        format!(
            "{:<width$} {}",
            entry.label,
            entry.count,
            width = LABEL_COLUMN_WIDTH
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
