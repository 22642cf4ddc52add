//! Options that select how a pipeline reconciles its curriculum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Native script of a lesson set.
///
/// Selects the letter range the keyword extractor accepts alongside Latin
/// letters, so mixed-script titles contribute tokens from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// Marathi, Hindi (U+0900..=U+097F).
    #[default]
    Devanagari,
    /// Gujarati (U+0A80..=U+0AFF).
    Gujarati,
}

impl Script {
    /// Inclusive code point range of the script's block.
    #[must_use]
    pub const fn letter_range(&self) -> (char, char) {
        match self {
            Self::Devanagari => ('\u{0900}', '\u{097F}'),
            Self::Gujarati => ('\u{0A80}', '\u{0AFF}'),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Devanagari => "devanagari",
            Self::Gujarati => "gujarati",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Script {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "devanagari" => Ok(Self::Devanagari),
            "gujarati" => Ok(Self::Gujarati),
            _ => Err(ModelError::UnknownVariant {
                kind: "script",
                value: value.to_string(),
            }),
        }
    }
}

/// How curated titles are resolved to chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Override, exact, containment, keyword overlap, weak substring.
    /// A title with no acceptable candidate stays unmatched.
    #[default]
    Layered,
    /// Override, exact, containment, then the next unclaimed chapter in
    /// catalog order. Every title gets an id while chapters remain, even
    /// when the text does not agree.
    Positional,
}

impl MatchMode {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Layered => "layered",
            Self::Positional => "positional",
        }
    }

    /// Whether this mode may assign an id without textual evidence.
    #[must_use]
    pub const fn is_total(&self) -> bool {
        matches!(self, Self::Positional)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchMode {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "layered" => Ok(Self::Layered),
            "positional" => Ok(Self::Positional),
            _ => Err(ModelError::UnknownVariant {
                kind: "match mode",
                value: value.to_string(),
            }),
        }
    }
}
