//! Run profiles: a TOML file naming the inputs and outputs of a run.
//!
//! ```toml
//! language = "marathi"
//! catalog = "scraped/chapters.json"
//! output = "site/structure.json"
//! report = "site/review.json"
//!
//! [matcher]
//! part_bonus = 10
//! ```
//!
//! Relative paths resolve against the directory holding the profile.

use std::fs;
use std::path::{Path, PathBuf};

use lesson_map::MatcherSettings;
use lesson_model::{MatchMode, Script};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Matcher fields a profile may set. Unset fields keep the value from the
/// layer below (built-in language defaults).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherProfile {
    pub script: Option<Script>,
    pub min_keyword_overlap: Option<usize>,
    pub part_bonus: Option<usize>,
    pub weak_keyword_min_chars: Option<usize>,
}

impl MatcherProfile {
    /// Fields set on `self` replace those of `base`.
    #[must_use]
    pub fn apply(&self, base: MatcherSettings) -> MatcherSettings {
        MatcherSettings {
            script: self.script.unwrap_or(base.script),
            min_keyword_overlap: self.min_keyword_overlap.unwrap_or(base.min_keyword_overlap),
            part_bonus: self.part_bonus.unwrap_or(base.part_bonus),
            weak_keyword_min_chars: self
                .weak_keyword_min_chars
                .unwrap_or(base.weak_keyword_min_chars),
        }
    }

    /// Fields set on `other` win over fields set on `self`.
    #[must_use]
    pub fn merged_with(&self, other: &MatcherProfile) -> MatcherProfile {
        MatcherProfile {
            script: other.script.or(self.script),
            min_keyword_overlap: other.min_keyword_overlap.or(self.min_keyword_overlap),
            part_bonus: other.part_bonus.or(self.part_bonus),
            weak_keyword_min_chars: other.weak_keyword_min_chars.or(self.weak_keyword_min_chars),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub language: Option<String>,
    pub catalog: Option<PathBuf>,
    pub curriculum: Option<PathBuf>,
    pub overrides: Option<PathBuf>,
    /// Disable the language's built-in override table.
    pub no_overrides: bool,
    pub mode: Option<MatchMode>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub matcher: MatcherProfile,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
        let profile: Profile = toml::from_str(&contents).map_err(|e| IngestError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        debug!(path = %path.display(), base = %base.display(), "loaded profile");
        Ok(profile.resolved_against(base))
    }

    /// Rebase every relative path onto `base`.
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        for path in [
            &mut self.catalog,
            &mut self.curriculum,
            &mut self.overrides,
            &mut self.output,
            &mut self.report,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
