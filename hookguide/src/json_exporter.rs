//! JSON exporter for parsed guides
//!
//! The JSON shape is the document model itself: parts, hooks and content
//! sections tagged by `type`, ready for a rendering layer to consume.

use crate::guide_model::Document;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during JSON export
#[derive(Error, Debug)]
pub enum JsonExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Serialize a guide document to pretty-printed JSON
pub fn to_json_string(doc: &Document) -> Result<String, JsonExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Export a guide document to a JSON file
///
/// # Parameters
/// * `doc` - The parsed guide
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
/// * `Ok(())` - Successfully exported to JSON
/// * `Err(JsonExportError)` - Error during serialization or writing
pub fn to_json(doc: &Document, output_path: &Path) -> Result<(), JsonExportError> {
    let json = to_json_string(doc)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, json)?;

    log::info!("Wrote JSON to {}", output_path.display());
    Ok(())
}
