//! Batch pipeline: dictionary file in, Markov seed dataset (plus lite sample) out.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::clean_entry;
use crate::error::DictError;

/// Log progress every this many entries.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Entries in the lite dataset; enough for decent chains while staying fast to load.
pub const LITE_SAMPLE_SIZE: usize = 500;

/// One dictionary entry that survived cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedEntry {
    pub word: String,
    pub definition: String,
}

/// Counters for one dataset build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub total: usize,
    pub kept: usize,
    pub skipped: usize,
}

/// Read any JSON document from `path`.
pub fn load_json(path: &Path) -> Result<Value, DictError> {
    read_json(path)
}

/// Read a word → definition object. Document order is preserved.
pub fn load_dictionary(path: &Path) -> Result<Map<String, Value>, DictError> {
    let dict: Map<String, Value> = read_json(path)?;
    info!(path = %path.display(), entries = dict.len(), "loaded dictionary");
    Ok(dict)
}

/// Read a dataset previously written by [`write_entries`].
pub fn load_entries(path: &Path) -> Result<Vec<CleanedEntry>, DictError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DictError> {
    let bytes = fs::read(path).map_err(|source| DictError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DictError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Clean every entry of `dict`, keeping the usable ones in input order.
///
/// Definitions that are not strings are skipped like any other rejected entry.
pub fn build_dataset(dict: &Map<String, Value>) -> (Vec<CleanedEntry>, BuildStats) {
    let total = dict.len();
    let mut stats = BuildStats {
        total,
        ..BuildStats::default()
    };
    let mut entries = Vec::with_capacity(total);

    for (position, (word, raw)) in dict.iter().enumerate() {
        let processed = position + 1;

        match raw.as_str().and_then(|definition| clean_entry(word, definition)) {
            Some(entry) => entries.push(entry),
            None => {
                stats.skipped += 1;
                debug!(word = %word, string = raw.is_string(), "skipped entry");
            }
        }

        if processed % PROGRESS_INTERVAL == 0 || processed == total {
            info!(processed, total, "progress");
        }
    }

    stats.kept = entries.len();
    (entries, stats)
}

/// Pick the lite dataset.
///
/// Returns every entry, in order, when there are at most `sample_size` of them;
/// otherwise `sample_size` distinct entries chosen uniformly by `rng`.
pub fn sample_lite<R>(entries: &[CleanedEntry], sample_size: usize, rng: &mut R) -> Vec<CleanedEntry>
where
    R: Rng + ?Sized,
{
    if entries.len() <= sample_size {
        return entries.to_vec();
    }
    index::sample(rng, entries.len(), sample_size)
        .into_iter()
        .map(|i| entries[i].clone())
        .collect()
}

/// Write entries as a pretty-printed (2-space) JSON array, non-ASCII kept as is.
pub fn write_entries(path: &Path, entries: &[CleanedEntry]) -> Result<(), DictError> {
    let write_err = |source: io::Error| DictError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries).map_err(|source| {
        DictError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(write_err)?;

    info!(path = %path.display(), entries = entries.len(), "wrote dataset");
    Ok(())
}

/// Full run: load, clean, write the dataset, then write the lite sample.
pub fn prepare_markov_db<R>(
    input: &Path,
    output: &Path,
    lite_output: &Path,
    lite_size: usize,
    rng: &mut R,
) -> Result<BuildStats, DictError>
where
    R: Rng + ?Sized,
{
    let dict = load_dictionary(input)?;
    let (entries, stats) = build_dataset(&dict);
    write_entries(output, &entries)?;

    let lite = sample_lite(&entries, lite_size, rng);
    write_entries(lite_output, &lite)?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn dict(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn entries(n: usize) -> Vec<CleanedEntry> {
        (0..n)
            .map(|i| CleanedEntry {
                word: format!("word{i}"),
                definition: format!("definition number {i}"),
            })
            .collect()
    }

    #[test]
    fn test_build_keeps_order_and_counts() {
        let input = dict(json!({
            "zebra": "An African\nwild horse [Zool.] with stripes.",
            "a": "Word",
            "apple": "The fleshy fruit. See Pome.",
            "empty": "",
        }));

        let (kept, stats) = build_dataset(&input);
        assert_eq!(
            stats,
            BuildStats {
                total: 4,
                kept: 2,
                skipped: 2
            }
        );
        assert_eq!(kept[0].word, "zebra");
        assert_eq!(kept[0].definition, "An African wild horse with stripes.");
        assert_eq!(kept[1].word, "apple");
        assert_eq!(kept[1].definition, "The fleshy fruit.");
    }

    #[test]
    fn test_non_string_definitions_are_skipped() {
        let input = dict(json!({
            "one": 1,
            "list": ["not", "a", "string"],
            "nothing": null,
            "fine": "A perfectly good definition",
        }));

        let (kept, stats) = build_dataset(&input);
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.kept, 1);
        assert_eq!(kept[0].word, "fine");
    }

    #[test]
    fn test_sample_returns_all_when_small() {
        let all = entries(10);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_lite(&all, 10, &mut rng), all);
        assert_eq!(sample_lite(&all, 500, &mut rng), all);
    }

    #[test]
    fn test_sample_is_distinct_and_sized() {
        let all = entries(100);
        let mut rng = StdRng::seed_from_u64(7);
        let lite = sample_lite(&all, 20, &mut rng);
        assert_eq!(lite.len(), 20);

        let mut words: Vec<&str> = lite.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), 20);
        assert!(lite.iter().all(|e| all.contains(e)));
    }

    #[test]
    fn test_sample_is_deterministic_for_seed() {
        let all = entries(1000);
        let first = sample_lite(&all, 50, &mut StdRng::seed_from_u64(42));
        let second = sample_lite(&all, 50, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
