//! Reconciled lesson hierarchy consumed by the static site.
//!
//! The serialized shape is a contract with the front end:
//! `{"majorLessons":[{"name":..,"sublessons":[{"title":..,"chapterId":n|null}]}]}`.

use serde::{Deserialize, Serialize};

use crate::ids::ChapterId;

/// A curated title and the chapter it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sublesson {
    pub title: String,
    pub chapter_id: Option<ChapterId>,
}

impl Sublesson {
    pub fn is_matched(&self) -> bool {
        self.chapter_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorLesson {
    pub name: String,
    pub sublessons: Vec<Sublesson>,
}

impl MajorLesson {
    pub fn unmatched_count(&self) -> usize {
        self.sublessons.iter().filter(|s| !s.is_matched()).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStructure {
    pub major_lessons: Vec<MajorLesson>,
}

impl LessonStructure {
    pub fn total_count(&self) -> usize {
        self.major_lessons.iter().map(|m| m.sublessons.len()).sum()
    }

    pub fn unmatched_count(&self) -> usize {
        self.major_lessons
            .iter()
            .map(MajorLesson::unmatched_count)
            .sum()
    }

    pub fn matched_ids(&self) -> impl Iterator<Item = ChapterId> + '_ {
        self.major_lessons
            .iter()
            .flat_map(|m| m.sublessons.iter())
            .filter_map(|s| s.chapter_id)
    }
}
