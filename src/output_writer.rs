use std::fs;
use std::path::Path;

use crate::error::FinderError;
use crate::results::ResultMap;

/// Writes the full result mapping as pretty-printed JSON, overwriting
/// any existing file. Unlike the per-item network paths, a write
/// failure here is fatal for the run.
pub fn write_results<P: AsRef<Path>>(results: &ResultMap, path: P) -> Result<(), FinderError> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    Ok(())
}
