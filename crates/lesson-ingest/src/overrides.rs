//! Override table loading.
//!
//! ```toml
//! [[override]]
//! title = "Idioms and Phrases in Marathi / different sentence formation in Marathi"
//! chapter = 4
//! ```

use std::fs;
use std::path::Path;

use lesson_map::OverrideTable;
use lesson_model::ChapterId;
use serde::Deserialize;
use tracing::info;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    #[serde(default, rename = "override")]
    entries: Vec<OverrideEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    title: String,
    chapter: ChapterId,
}

pub fn load_overrides(path: &Path) -> Result<OverrideTable> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let table = parse_overrides(&contents, path)?;
    info!(path = %path.display(), overrides = table.len(), "loaded override table");
    Ok(table)
}

pub fn parse_overrides(contents: &str, origin: &Path) -> Result<OverrideTable> {
    let file: OverrideFile = toml::from_str(contents).map_err(|e| IngestError::Toml {
        path: origin.to_path_buf(),
        source: e,
    })?;
    OverrideTable::from_pairs(file.entries.into_iter().map(|e| (e.title, e.chapter)))
        .map_err(|e| IngestError::invalid(origin, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_and_empty_files() {
        let table = parse_overrides(
            "[[override]]\ntitle = \"Idioms\"\nchapter = 4\n",
            Path::new("o.toml"),
        )
        .unwrap();
        assert_eq!(table.lookup("idioms"), Some(ChapterId::new(4).unwrap()));

        assert!(parse_overrides("", Path::new("o.toml")).unwrap().is_empty());
        assert!(
            parse_overrides("override = []", Path::new("o.toml"))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn zero_chapter_is_rejected() {
        let err = parse_overrides(
            "[[override]]\ntitle = \"Idioms\"\nchapter = 0\n",
            Path::new("o.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::Toml { .. }));
    }

    #[test]
    fn duplicate_titles_are_invalid() {
        let toml = "[[override]]\ntitle = \"Idioms\"\nchapter = 4\n\n[[override]]\ntitle = \"IDIOMS\"\nchapter = 5\n";
        let err = parse_overrides(toml, Path::new("o.toml")).unwrap_err();
        assert!(matches!(err, IngestError::Invalid { .. }));
    }
}
