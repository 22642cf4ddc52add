//! Built-in language pipelines.
//!
//! Curricula and override tables for the supported languages are embedded at
//! compile time with `include_str!()`, so a run only needs a catalog path.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lesson_map::OverrideTable;
use lesson_model::{Curriculum, MatchMode, Script};

use crate::curriculum::parse_curriculum;
use crate::error::{IngestError, Result};
use crate::overrides::parse_overrides;

const MARATHI_CURRICULUM: &str = include_str!("../data/curricula/marathi.json");
const MARATHI_OVERRIDES: &str = include_str!("../data/overrides/marathi.toml");
const GUJARATI_CURRICULUM: &str = include_str!("../data/curricula/gujarati.json");
const GUJARATI_OVERRIDES: &str = include_str!("../data/overrides/gujarati.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Marathi,
    Gujarati,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Marathi, Language::Gujarati];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Marathi => "marathi",
            Self::Gujarati => "gujarati",
        }
    }

    #[must_use]
    pub const fn script(&self) -> Script {
        match self {
            Self::Marathi => Script::Devanagari,
            Self::Gujarati => Script::Gujarati,
        }
    }

    /// The Gujarati site follows curriculum order closely enough that
    /// positional assignment is used; Marathi needs textual evidence.
    #[must_use]
    pub const fn default_mode(&self) -> MatchMode {
        match self {
            Self::Marathi => MatchMode::Layered,
            Self::Gujarati => MatchMode::Positional,
        }
    }

    pub fn curriculum(&self) -> Result<Curriculum> {
        let (contents, origin) = match self {
            Self::Marathi => (MARATHI_CURRICULUM, "builtin/curricula/marathi.json"),
            Self::Gujarati => (GUJARATI_CURRICULUM, "builtin/curricula/gujarati.json"),
        };
        parse_curriculum(contents, Path::new(origin))
    }

    pub fn overrides(&self) -> Result<OverrideTable> {
        let (contents, origin) = match self {
            Self::Marathi => (MARATHI_OVERRIDES, "builtin/overrides/marathi.toml"),
            Self::Gujarati => (GUJARATI_OVERRIDES, "builtin/overrides/gujarati.toml"),
        };
        parse_overrides(contents, Path::new(origin))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = IngestError;

    fn from_str(value: &str) -> Result<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IngestError::UnknownLanguage {
                name: value.to_string(),
                available: Self::ALL
                    .iter()
                    .map(Language::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marathi_curriculum_shape() {
        let curriculum = Language::Marathi.curriculum().unwrap();
        assert_eq!(curriculum.language.as_deref(), Some("marathi"));
        assert_eq!(curriculum.groups.len(), 7);
        assert_eq!(curriculum.entry_count(), 175);
        assert_eq!(curriculum.groups[0].name, "Introductory lessons");
    }

    #[test]
    fn gujarati_curriculum_shape() {
        let curriculum = Language::Gujarati.curriculum().unwrap();
        assert_eq!(curriculum.language.as_deref(), Some("gujarati"));
        assert_eq!(curriculum.groups.len(), 7);
        assert_eq!(curriculum.entry_count(), 108);
    }

    #[test]
    fn builtin_overrides_parse() {
        let marathi = Language::Marathi.overrides().unwrap();
        assert_eq!(marathi.len(), 2);
        assert_eq!(
            marathi
                .lookup("Idioms and Phrases in Marathi / different sentence formation in Marathi")
                .map(lesson_model::ChapterId::get),
            Some(4)
        );
        assert!(Language::Gujarati.overrides().unwrap().is_empty());
    }

    #[test]
    fn override_titles_appear_in_curriculum() {
        let curriculum = Language::Marathi.curriculum().unwrap();
        let titles: Vec<String> = curriculum
            .groups
            .iter()
            .flat_map(|g| g.titles.iter().map(|t| lesson_map::normalize(t)))
            .collect();
        for (title, _) in Language::Marathi.overrides().unwrap().iter() {
            assert!(titles.iter().any(|t| t == title), "{title} not curated");
        }
    }

    #[test]
    fn parse_language_names() {
        assert_eq!("Gujarati".parse::<Language>().unwrap(), Language::Gujarati);
        assert!(matches!(
            "hindi".parse::<Language>(),
            Err(IngestError::UnknownLanguage { .. })
        ));
    }
}
