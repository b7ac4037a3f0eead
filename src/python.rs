//! Python bindings, built with `--features python`.

use std::error::Error;
use std::path::Path;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::error::DictError;
use crate::{LITE_SAMPLE_SIZE, labels};

fn to_py_err(err: DictError) -> PyErr {
    let mut message = err.to_string();
    if let Some(source) = err.source() {
        message.push_str(&format!(": {}", source));
    }
    match err {
        DictError::Parse { .. } => PyValueError::new_err(message),
        _ => PyIOError::new_err(message),
    }
}

/// Clean one raw definition
#[pyfunction]
fn clean_definition(text: String) -> PyResult<String> {
    Ok(crate::clean_definition(&text))
}

/// Whether a cleaned definition has at least two words
#[pyfunction]
fn is_usable_definition(text: String) -> PyResult<bool> {
    Ok(crate::is_usable_definition(&text))
}

/// Raw label matches in a JSON document given as text
#[pyfunction]
fn extract_labels(json_text: String) -> PyResult<Vec<String>> {
    let value: Value = serde_json::from_str(&json_text)
        .map_err(|e| PyValueError::new_err(format!("Invalid JSON: {}", e)))?;
    Ok(labels::extract_labels(&value))
}

/// Frequent labels in a JSON file, most frequent first
/// Returns: list of (label, count)
#[pyfunction]
fn mine_labels_file(file_path: String) -> PyResult<Vec<(String, u64)>> {
    let value = crate::load_json(Path::new(&file_path)).map_err(to_py_err)?;
    Ok(labels::mine_labels(&value)
        .into_iter()
        .map(|entry| (entry.label, entry.count as u64))
        .collect())
}

/// Build the cleaned dataset and its lite sample, entirely in Rust
/// Returns: (total, kept, skipped)
#[pyfunction]
#[pyo3(signature = (input_path, output_path, lite_path, lite_size = LITE_SAMPLE_SIZE, seed = None))]
fn prepare_markov_db(
    input_path: String,
    output_path: String,
    lite_path: String,
    lite_size: usize,
    seed: Option<u64>,
) -> PyResult<(u64, u64, u64)> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let stats = crate::prepare_markov_db(
        Path::new(&input_path),
        Path::new(&output_path),
        Path::new(&lite_path),
        lite_size,
        &mut rng,
    )
    .map_err(to_py_err)?;
    Ok((stats.total as u64, stats.kept as u64, stats.skipped as u64))
}

#[pymodule]
fn rust_dict_clean(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clean_definition, m)?)?;
    m.add_function(wrap_pyfunction!(is_usable_definition, m)?)?;
    m.add_function(wrap_pyfunction!(extract_labels, m)?)?;
    m.add_function(wrap_pyfunction!(mine_labels_file, m)?)?;
    m.add_function(wrap_pyfunction!(prepare_markov_db, m)?)?;
    Ok(())
}
