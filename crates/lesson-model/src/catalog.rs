//! Scraped chapter catalog.
//!
//! The catalog keeps chapters in the order the scraper produced them. Several
//! matching tie-breaks depend on "first in catalog order", so the backing
//! store is a `Vec` with a side index for id lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::ChapterId;

/// A scraped content unit.
///
/// Fields other than `id`, `title` and `url` (page content, tables) are
/// ignored when loading; they are opaque to reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Chapter {
    pub fn new(id: ChapterId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: None,
        }
    }
}

/// Ordered, id-unique collection of chapters.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    index: BTreeMap<ChapterId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (position, chapter) in chapters.iter().enumerate() {
            if let Some(previous) = index.insert(chapter.id, position) {
                return Err(ModelError::DuplicateChapterId {
                    id: chapter.id,
                    first: chapters[previous].title.clone(),
                    second: chapter.title.clone(),
                });
            }
        }
        Ok(Self { chapters, index })
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapters in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn get(&self, id: ChapterId) -> Option<&Chapter> {
        self.index.get(&id).map(|&position| &self.chapters[position])
    }

    pub fn contains(&self, id: ChapterId) -> bool {
        self.index.contains_key(&id)
    }

    /// Titles shared by more than one chapter, with the ids carrying them.
    ///
    /// Comparison is on the trimmed, lower-cased title.
    pub fn duplicate_titles(&self) -> Vec<(String, Vec<ChapterId>)> {
        let mut by_title: BTreeMap<String, Vec<ChapterId>> = BTreeMap::new();
        for chapter in &self.chapters {
            by_title
                .entry(chapter.title.trim().to_lowercase())
                .or_default()
                .push(chapter.id);
        }
        by_title
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}
