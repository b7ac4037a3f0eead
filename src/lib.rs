//! Dictionary cleanup for Markov-chain seeding.
//!
//! Turns raw word → definition pairs into short, normalized definition text and
//! mines the recurring parenthetical labels (`(Bot.)`, `(Zoöl.)`, ...) that the
//! cleaned text still carries.

use lazy_static::lazy_static;
use regex::Regex;

pub mod dataset;
pub mod error;
pub mod labels;
pub mod logging;

#[cfg(feature = "python")]
mod python;

pub use dataset::{
    BuildStats, CleanedEntry, LITE_SAMPLE_SIZE, PROGRESS_INTERVAL, build_dataset, load_dictionary,
    load_entries, load_json, prepare_markov_db, sample_lite, write_entries,
};
pub use error::DictError;
pub use labels::{LabelCount, count_and_filter, extract_labels, mine_labels, render_report};

// Pre-compile all definition patterns at module load time
lazy_static! {
    // Ordered removal passes; each one runs over the output of the previous one.
    static ref DEFINITION_PATTERNS: Vec<Regex> = {
        vec![
            // Cross-references: "See Foo." / "see foo."
            Regex::new(r"(?i)See [A-Z][a-z]+\.").unwrap(),
            // Bracketed etymology and citation notes, nearest closing bracket
            Regex::new(r"\[.*?\]").unwrap(),
            // Trailing dash annotation: " -- Shak."
            Regex::new(r"\s--\s.*").unwrap(),
            // Same annotation introduced by a semicolon: "; -- Milton."
            Regex::new(r";\s--\s.*").unwrap(),
        ]
    };

    // Sense numbering left inside merged definitions: "2. ", "13. "
    static ref ENUMERATION_PATTERN: Regex = Regex::new(r"\b\d+\.\s").unwrap();

    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
}

/// Separator used to split a definition into sentence-like parts.
const SENTENCE_SEPARATOR: &str = ". ";

/// A trailing part with at most this many words may be a stray fragment.
const MAX_FRAGMENT_WORDS: usize = 3;

// =============================================================================
// Definition Cleaning
// =============================================================================

/// Normalize a raw dictionary definition.
///
/// Strips cross-references, bracketed notes, dash annotations, quotes and sense
/// numbers, then drops a short capitalized trailing fragment such as a source
/// abbreviation. Never fails; check the result with [`is_usable_definition`].
pub fn clean_definition(text: &str) -> String {
    let mut result = text.replace('\n', " ");

    for pattern in DEFINITION_PATTERNS.iter() {
        result = pattern.replace_all(&result, "").into_owned();
    }

    result = result.replace('"', "");
    result = ENUMERATION_PATTERN.replace_all(&result, "").into_owned();
    result = collapse_whitespace(&result);

    if let Some(trimmed) = drop_trailing_fragment(&result) {
        result = trimmed;
    }

    collapse_whitespace(&result)
}

/// Whether a cleaned definition is worth keeping: non-empty and more than one word.
pub fn is_usable_definition(cleaned: &str) -> bool {
    cleaned.split_whitespace().nth(1).is_some()
}

/// Clean one entry and apply the acceptance rule in a single step.
pub fn clean_entry(word: &str, definition: &str) -> Option<CleanedEntry> {
    let cleaned = clean_definition(definition);
    if !is_usable_definition(&cleaned) {
        return None;
    }
    Some(CleanedEntry {
        word: word.to_string(),
        definition: cleaned,
    })
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_PATTERN.replace_all(text, " ").trim().to_string()
}

/// Returns the text without its last part when that part looks like a stray
/// trailing fragment ("Noun", "Am. Cyc", "Johnson").
fn drop_trailing_fragment(text: &str) -> Option<String> {
    let parts: Vec<&str> = text.split(SENTENCE_SEPARATOR).collect();
    let (last, head) = parts.split_last()?;
    if head.is_empty() {
        return None;
    }

    let last = last.trim();
    let starts_upper = last.chars().next().is_some_and(char::is_uppercase);
    if last.split_whitespace().count() > MAX_FRAGMENT_WORDS || !starts_upper {
        return None;
    }

    let mut joined = head.join(SENTENCE_SEPARATOR);
    joined.push('.');
    Some(joined)
}
