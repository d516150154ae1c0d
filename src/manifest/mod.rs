//! Manifest loading
//!
//! Manifests are hand-maintained JSON files that may carry `//` comments.
//! They are read fresh on every run and never written back.

pub mod comments;

use crate::error::GenError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Read a manifest, strip its comments and parse it as JSON.
///
/// `dir` is the properties directory, `filename` is resolved inside it. Parse
/// failures carry the filename and the 1-based line/column in the stripped
/// text.
pub fn load(dir: &Path, filename: &str) -> Result<Value, GenError> {
    let path = dir.join(filename);
    let text = std::fs::read_to_string(&path).map_err(|e| GenError::io(&path, e))?;
    let stripped = comments::strip(&text);

    let value = serde_json::from_str(&stripped).map_err(|e| GenError::parse(filename, &e))?;
    tracing::debug!("Loaded manifest {}", path.display());
    Ok(value)
}

/// Load a manifest and decode it into a typed structure.
pub fn load_as<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<T, GenError> {
    let value = load(dir, filename)?;
    serde_json::from_value(value).map_err(|e| GenError::Shape {
        file: filename.to_string(),
        message: e.to_string(),
    })
}
