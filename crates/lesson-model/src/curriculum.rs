//! Hand-curated lesson hierarchy.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A named, ordered list of curated sublesson titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonGroup {
    pub name: String,
    pub titles: Vec<String>,
}

impl LessonGroup {
    pub fn new<I, S>(name: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Curated hierarchy, processed group by group and title by title in the
/// order given here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub groups: Vec<LessonGroup>,
}

impl Curriculum {
    pub fn new(groups: Vec<LessonGroup>) -> Self {
        Self {
            language: None,
            groups,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Reject groups without a name.
    pub fn validate(&self) -> Result<()> {
        for (index, group) in self.groups.iter().enumerate() {
            if group.name.trim().is_empty() {
                return Err(ModelError::EmptyGroupName { index });
            }
        }
        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.titles.len()).sum()
    }
}
