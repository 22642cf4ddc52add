//! Curated lesson hierarchy loading.

use std::fs;
use std::path::Path;

use lesson_model::Curriculum;
use tracing::info;

use crate::error::{IngestError, Result};

/// Load a curriculum file of the form
/// `{"language": "...", "groups": [{"name": "...", "titles": ["..."]}]}`.
pub fn load_curriculum(path: &Path) -> Result<Curriculum> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let curriculum = parse_curriculum(&contents, path)?;
    info!(
        path = %path.display(),
        groups = curriculum.groups.len(),
        entries = curriculum.entry_count(),
        "loaded curriculum"
    );
    Ok(curriculum)
}

pub fn parse_curriculum(contents: &str, origin: &Path) -> Result<Curriculum> {
    let curriculum: Curriculum = serde_json::from_str(contents).map_err(|e| IngestError::Json {
        path: origin.to_path_buf(),
        source: e,
    })?;
    curriculum
        .validate()
        .map_err(|e| IngestError::invalid(origin, e))?;
    Ok(curriculum)
}
