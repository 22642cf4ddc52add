//! Hand-maintained title-to-id pins that bypass textual matching.

use std::collections::BTreeMap;

use lesson_model::{ChapterId, ModelError};

use crate::text::normalize;

/// Immutable map from normalized curated title to a pinned chapter id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: BTreeMap<String, ChapterId>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(title, id)` pairs.
    ///
    /// Titles are normalized before insertion; two titles that normalize to the
    /// same key are rejected even when they point at the same id.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (S, ChapterId)>,
        S: AsRef<str>,
    {
        let mut entries = BTreeMap::new();
        for (title, id) in pairs {
            let key = normalize(title.as_ref());
            if entries.insert(key, id).is_some() {
                return Err(ModelError::DuplicateOverride(title.as_ref().to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Pinned id for a curated title, if any.
    pub fn lookup(&self, title: &str) -> Option<ChapterId> {
        self.get_normalized(&normalize(title))
    }

    /// Lookup for a title that is already normalized.
    pub fn get_normalized(&self, normalized: &str) -> Option<ChapterId> {
        self.entries.get(normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ChapterId)> + '_ {
        self.entries.iter().map(|(title, id)| (title.as_str(), *id))
    }
}
