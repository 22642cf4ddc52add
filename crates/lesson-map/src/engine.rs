//! Title-to-chapter matching.
//!
//! [`MatchEngine`] indexes a catalog once (normalized title, keyword set and
//! part flag per chapter) and resolves curated titles against it.
//!
//! In layered mode the strategy chain is walked in order and the first
//! strategy that yields an unclaimed, existing chapter wins. Positional mode
//! always assigns something while unclaimed chapters remain.

use std::collections::BTreeSet;

use lesson_model::{Catalog, ChapterId, MatchMode};
use serde::Serialize;
use tracing::{debug, trace};

use crate::claims::ClaimedIds;
use crate::overrides::OverrideTable;
use crate::settings::MatcherSettings;
use crate::strategy::Strategy;
use crate::text::{is_part_two_or_higher, keywords, normalize};

/// A resolved assignment and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub chapter_id: ChapterId,
    pub strategy: Strategy,
}

/// Resolves one curated title given the ids claimed so far.
pub trait TitleMatcher {
    fn resolve(&self, title: &str, claimed: &ClaimedIds) -> Option<MatchOutcome>;

    fn mode(&self) -> MatchMode;
}

/// Result of running a single strategy in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyProbe {
    pub strategy: Strategy,
    pub chapter_id: Option<ChapterId>,
}

#[derive(Debug, Clone)]
struct IndexedChapter {
    id: ChapterId,
    normalized: String,
    keywords: BTreeSet<String>,
    later_part: bool,
}

/// Derived features of a curated title, computed once per resolution.
#[derive(Debug, Clone)]
struct TitleQuery {
    normalized: String,
    keywords: BTreeSet<String>,
    later_part: bool,
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    mode: MatchMode,
    settings: MatcherSettings,
    overrides: OverrideTable,
    chapters: Vec<IndexedChapter>,
    known: BTreeSet<ChapterId>,
}

impl MatchEngine {
    pub fn new(
        catalog: &Catalog,
        overrides: OverrideTable,
        mode: MatchMode,
        settings: MatcherSettings,
    ) -> Self {
        let chapters: Vec<IndexedChapter> = catalog
            .iter()
            .map(|chapter| IndexedChapter {
                id: chapter.id,
                normalized: normalize(&chapter.title),
                keywords: keywords(&chapter.title, settings.script),
                later_part: is_part_two_or_higher(&chapter.title),
            })
            .collect();
        let known = chapters.iter().map(|c| c.id).collect();
        debug!(
            chapters = chapters.len(),
            overrides = overrides.len(),
            mode = %mode,
            script = %settings.script,
            "indexed catalog"
        );
        Self {
            mode,
            settings,
            overrides,
            chapters,
            known,
        }
    }

    pub fn settings(&self) -> &MatcherSettings {
        &self.settings
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Run every strategy of the engine's chain independently against an
    /// empty claim set. Diagnostic only; it does not reflect earlier claims.
    pub fn explain(&self, title: &str) -> Vec<StrategyProbe> {
        let query = self.query(title);
        let claimed = ClaimedIds::new();
        Strategy::chain(self.mode)
            .iter()
            .map(|&strategy| StrategyProbe {
                strategy,
                chapter_id: self.apply(strategy, &query, &claimed),
            })
            .collect()
    }

    fn query(&self, title: &str) -> TitleQuery {
        TitleQuery {
            normalized: normalize(title),
            keywords: keywords(title, self.settings.script),
            later_part: is_part_two_or_higher(title),
        }
    }

    fn available<'a>(
        &'a self,
        claimed: &'a ClaimedIds,
    ) -> impl Iterator<Item = &'a IndexedChapter> {
        self.chapters.iter().filter(|c| !claimed.contains(c.id))
    }

    fn apply(
        &self,
        strategy: Strategy,
        query: &TitleQuery,
        claimed: &ClaimedIds,
    ) -> Option<ChapterId> {
        match strategy {
            Strategy::Override => self.by_override(query, claimed),
            Strategy::Exact => self.by_exact(query, claimed),
            Strategy::Containment => self.by_containment(query, claimed),
            Strategy::ReverseContainment => self.by_reverse_containment(query, claimed),
            Strategy::BidirectionalContainment => self.by_either_containment(query, claimed),
            Strategy::KeywordOverlap => self.by_keyword_overlap(query, claimed),
            Strategy::WeakSubstring => self.by_weak_substring(query, claimed),
            Strategy::Positional => self.available(claimed).next().map(|c| c.id),
        }
    }

    /// Override, then a title lookup that ignores claims (exact, else either
    /// way containment). A lookup hit that is already claimed, or no hit at
    /// all, takes the first unclaimed chapter in catalog order.
    fn resolve_positional(
        &self,
        query: &TitleQuery,
        claimed: &ClaimedIds,
    ) -> Option<MatchOutcome> {
        if let Some(chapter_id) = self.by_override(query, claimed) {
            return Some(MatchOutcome {
                chapter_id,
                strategy: Strategy::Override,
            });
        }
        if let Some((chapter_id, strategy)) = self.lookup_ignoring_claims(query) {
            if !claimed.contains(chapter_id) {
                return Some(MatchOutcome {
                    chapter_id,
                    strategy,
                });
            }
            debug!(
                title = %query.normalized,
                %chapter_id,
                "title lookup hit a claimed chapter, assigning by position"
            );
        }
        self.apply(Strategy::Positional, query, claimed)
            .map(|chapter_id| MatchOutcome {
                chapter_id,
                strategy: Strategy::Positional,
            })
    }

    fn lookup_ignoring_claims(&self, query: &TitleQuery) -> Option<(ChapterId, Strategy)> {
        let unrestricted = ClaimedIds::new();
        self.by_exact(query, &unrestricted)
            .map(|id| (id, Strategy::Exact))
            .or_else(|| {
                self.by_either_containment(query, &unrestricted)
                    .map(|id| (id, Strategy::BidirectionalContainment))
            })
    }

    fn by_override(&self, query: &TitleQuery, claimed: &ClaimedIds) -> Option<ChapterId> {
        let id = self.overrides.get_normalized(&query.normalized)?;
        if !self.known.contains(&id) {
            debug!(
                title = %query.normalized,
                chapter_id = %id,
                "override targets a chapter missing from the catalog"
            );
            return None;
        }
        if claimed.contains(id) {
            debug!(
                title = %query.normalized,
                chapter_id = %id,
                "override target already claimed"
            );
            return None;
        }
        Some(id)
    }

    fn by_exact(&self, query: &TitleQuery, claimed: &ClaimedIds) -> Option<ChapterId> {
        self.available(claimed)
            .find(|c| c.normalized == query.normalized)
            .map(|c| c.id)
    }

    /// Chapters whose title contains the curated title. Agreement on "part 2+"
    /// ranks first, then the lowest id.
    fn by_containment(&self, query: &TitleQuery, claimed: &ClaimedIds) -> Option<ChapterId> {
        if query.normalized.is_empty() {
            return None;
        }
        self.available(claimed)
            .filter(|c| c.normalized.contains(query.normalized.as_str()))
            .min_by_key(|c| (c.later_part != query.later_part, c.id))
            .map(|c| c.id)
    }

    fn by_reverse_containment(
        &self,
        query: &TitleQuery,
        claimed: &ClaimedIds,
    ) -> Option<ChapterId> {
        self.available(claimed)
            .find(|c| {
                !c.normalized.is_empty() && query.normalized.contains(c.normalized.as_str())
            })
            .map(|c| c.id)
    }

    fn by_either_containment(
        &self,
        query: &TitleQuery,
        claimed: &ClaimedIds,
    ) -> Option<ChapterId> {
        if query.normalized.is_empty() {
            return None;
        }
        self.available(claimed)
            .find(|c| {
                !c.normalized.is_empty()
                    && (c.normalized.contains(query.normalized.as_str())
                        || query.normalized.contains(c.normalized.as_str()))
            })
            .map(|c| c.id)
    }

    /// Highest `overlap + bonus` among chapters sharing enough keywords.
    /// Only a strictly better score replaces the current best, so ties go to
    /// the chapter seen first.
    fn by_keyword_overlap(
        &self,
        query: &TitleQuery,
        claimed: &ClaimedIds,
    ) -> Option<ChapterId> {
        let mut best: Option<(usize, ChapterId)> = None;
        for chapter in self.available(claimed) {
            let overlap = query.keywords.intersection(&chapter.keywords).count();
            if overlap < self.settings.min_keyword_overlap {
                continue;
            }
            let bonus = if chapter.later_part == query.later_part {
                self.settings.part_bonus
            } else {
                0
            };
            let score = overlap + bonus;
            trace!(chapter_id = %chapter.id, overlap, score, "keyword candidate");
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, chapter.id));
            }
        }
        best.map(|(_, id)| id)
    }

    fn by_weak_substring(&self, query: &TitleQuery, claimed: &ClaimedIds) -> Option<ChapterId> {
        let needles: Vec<&str> = query
            .keywords
            .iter()
            .filter(|k| k.chars().count() >= self.settings.weak_keyword_min_chars)
            .map(String::as_str)
            .collect();
        if needles.is_empty() {
            return None;
        }
        self.available(claimed)
            .find(|c| needles.iter().any(|needle| c.normalized.contains(needle)))
            .map(|c| c.id)
    }
}

impl TitleMatcher for MatchEngine {
    fn resolve(&self, title: &str, claimed: &ClaimedIds) -> Option<MatchOutcome> {
        let query = self.query(title);
        match self.mode {
            MatchMode::Layered => Strategy::chain(self.mode).iter().find_map(|&strategy| {
                self.apply(strategy, &query, claimed)
                    .map(|chapter_id| MatchOutcome {
                        chapter_id,
                        strategy,
                    })
            }),
            MatchMode::Positional => self.resolve_positional(&query, claimed),
        }
    }

    fn mode(&self) -> MatchMode {
        self.mode
    }
}
