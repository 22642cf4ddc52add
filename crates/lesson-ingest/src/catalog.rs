//! Scraped chapter catalog loading.
//!
//! The scraper writes a JSON array of chapter objects. Only `id`, `title` and
//! `url` are read; page content and tables are skipped.

use std::fs;
use std::path::Path;

use lesson_model::{Catalog, Chapter};
use tracing::{info, warn};

use crate::error::{IngestError, Result};

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let catalog = parse_catalog(&contents, path)?;
    info!(path = %path.display(), chapters = catalog.len(), "loaded chapter catalog");
    Ok(catalog)
}

/// Parse catalog JSON. `origin` is only used in errors and logs.
pub fn parse_catalog(contents: &str, origin: &Path) -> Result<Catalog> {
    let chapters: Vec<Chapter> =
        serde_json::from_str(contents).map_err(|e| IngestError::Json {
            path: origin.to_path_buf(),
            source: e,
        })?;
    let catalog = Catalog::new(chapters).map_err(|e| IngestError::invalid(origin, e))?;
    for (title, ids) in catalog.duplicate_titles() {
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        warn!(
            path = %origin.display(),
            %title,
            ids = %ids.join(", "),
            "several chapters share a title; the first unclaimed one wins"
        );
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_model::ModelError;

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#;
        let err = parse_catalog(json, Path::new("chapters.json")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Invalid {
                source: ModelError::DuplicateChapterId { .. },
                ..
            }
        ));
    }

    #[test]
    fn duplicate_titles_are_kept() {
        let json = r#"[{"id": 1, "title": "Numbers"}, {"id": 2, "title": "numbers"}]"#;
        let catalog = parse_catalog(json, Path::new("chapters.json")).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn non_array_is_a_json_error() {
        let err = parse_catalog(r#"{"id": 1}"#, Path::new("chapters.json")).unwrap_err();
        assert!(matches!(err, IngestError::Json { .. }));
    }
}
