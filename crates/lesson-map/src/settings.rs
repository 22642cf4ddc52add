//! Tunable thresholds of the layered matcher.

use lesson_model::Script;
use serde::{Deserialize, Serialize};

/// Default minimum shared keywords for the keyword-overlap strategy.
pub const DEFAULT_MIN_KEYWORD_OVERLAP: usize = 2;
/// Default score bonus when both titles agree on being a later part.
pub const DEFAULT_PART_BONUS: usize = 10;
/// Default minimum keyword length, in characters, for the weak substring strategy.
pub const DEFAULT_WEAK_KEYWORD_MIN_CHARS: usize = 4;

/// Matcher configuration. Missing fields in a profile fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    /// Native script whose letters count as keyword characters.
    pub script: Script,
    pub min_keyword_overlap: usize,
    pub part_bonus: usize,
    pub weak_keyword_min_chars: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            script: Script::default(),
            min_keyword_overlap: DEFAULT_MIN_KEYWORD_OVERLAP,
            part_bonus: DEFAULT_PART_BONUS,
            weak_keyword_min_chars: DEFAULT_WEAK_KEYWORD_MIN_CHARS,
        }
    }
}

impl MatcherSettings {
    #[must_use]
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let settings: MatcherSettings =
            serde_json::from_str(r#"{"script": "gujarati", "part_bonus": 5}"#).unwrap();
        assert_eq!(settings.script, Script::Gujarati);
        assert_eq!(settings.part_bonus, 5);
        assert_eq!(settings.min_keyword_overlap, DEFAULT_MIN_KEYWORD_OVERLAP);
        assert_eq!(settings.weak_keyword_min_chars, DEFAULT_WEAK_KEYWORD_MIN_CHARS);
    }
}
