//! Greedy, order-sensitive reconciliation of a curriculum against a matcher.

use std::collections::BTreeMap;

use lesson_model::{
    Catalog, Chapter, ChapterId, Curriculum, LessonStructure, MajorLesson, MatchMode, Sublesson,
};
use serde::Serialize;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::claims::ClaimedIds;
use crate::engine::{MatchOutcome, TitleMatcher};
use crate::strategy::Strategy;

/// How one curated entry was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryTrace {
    pub group: String,
    pub title: String,
    pub chapter_id: Option<ChapterId>,
    pub strategy: Option<Strategy>,
}

/// Counts and per-entry traces of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub mode: MatchMode,
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub by_strategy: BTreeMap<Strategy, usize>,
    pub entries: Vec<EntryTrace>,
}

impl ReconcileReport {
    fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            total: 0,
            matched: 0,
            unmatched: 0,
            by_strategy: BTreeMap::new(),
            entries: Vec::new(),
        }
    }

    fn record(&mut self, entry: EntryTrace) {
        self.total += 1;
        match entry.strategy {
            Some(strategy) => {
                self.matched += 1;
                *self.by_strategy.entry(strategy).or_default() += 1;
            }
            None => self.unmatched += 1,
        }
        self.entries.push(entry);
    }

    pub fn unmatched_entries(&self) -> impl Iterator<Item = &EntryTrace> + '_ {
        self.entries.iter().filter(|e| e.chapter_id.is_none())
    }

    /// Entries assigned without textual evidence.
    pub fn positional_count(&self) -> usize {
        self.by_strategy
            .get(&Strategy::Positional)
            .copied()
            .unwrap_or(0)
    }
}

/// Output of [`reconcile`].
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub structure: LessonStructure,
    pub report: ReconcileReport,
    pub claimed: ClaimedIds,
}

impl Reconciliation {
    /// Catalog chapters no entry was assigned to, in catalog order.
    pub fn unclaimed<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Chapter> {
        catalog.iter().filter(|c| !self.claimed.contains(c.id))
    }
}

/// Walk the curriculum in order, resolving each title with `matcher` and
/// claiming the chosen id so no later title can take it.
///
/// Group names and order are copied through unchanged. An unresolved title
/// keeps its slot with no chapter id.
pub fn reconcile<M>(matcher: &M, curriculum: &Curriculum) -> Reconciliation
where
    M: TitleMatcher + ?Sized,
{
    let mode = matcher.mode();
    let span = info_span!(
        "reconcile",
        mode = %mode,
        groups = curriculum.groups.len(),
        entries = curriculum.entry_count()
    );
    let _enter = span.enter();

    let mut claimed = ClaimedIds::new();
    let mut report = ReconcileReport::new(mode);
    let mut major_lessons = Vec::with_capacity(curriculum.groups.len());

    for group in &curriculum.groups {
        let group_span = debug_span!("group", name = %group.name);
        let mut sublessons = Vec::with_capacity(group.titles.len());
        for title in &group.titles {
            let outcome =
                group_span.in_scope(|| resolve_entry(matcher, &group.name, title, &mut claimed));
            let chapter_id = outcome.map(|o| o.chapter_id);
            report.record(EntryTrace {
                group: group.name.clone(),
                title: title.clone(),
                chapter_id,
                strategy: outcome.map(|o| o.strategy),
            });
            sublessons.push(Sublesson {
                title: title.clone(),
                chapter_id,
            });
        }
        major_lessons.push(MajorLesson {
            name: group.name.clone(),
            sublessons,
        });
    }

    info!(
        total = report.total,
        matched = report.matched,
        unmatched = report.unmatched,
        positional = report.positional_count(),
        "reconciliation complete"
    );

    Reconciliation {
        structure: LessonStructure { major_lessons },
        report,
        claimed,
    }
}

fn resolve_entry<M>(
    matcher: &M,
    group: &str,
    title: &str,
    claimed: &mut ClaimedIds,
) -> Option<MatchOutcome>
where
    M: TitleMatcher + ?Sized,
{
    let Some(outcome) = matcher.resolve(title, claimed) else {
        warn!(group, title, "no chapter match");
        return None;
    };
    if !claimed.claim(outcome.chapter_id) {
        warn!(
            group,
            title,
            chapter_id = %outcome.chapter_id,
            "matcher proposed an already claimed chapter"
        );
        return None;
    }
    debug!(
        title,
        chapter_id = %outcome.chapter_id,
        strategy = %outcome.strategy,
        "matched"
    );
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_model::LessonGroup;

    /// Always proposes the same chapter.
    struct Stubborn(ChapterId);

    impl TitleMatcher for Stubborn {
        fn resolve(&self, _title: &str, _claimed: &ClaimedIds) -> Option<MatchOutcome> {
            Some(MatchOutcome {
                chapter_id: self.0,
                strategy: Strategy::Exact,
            })
        }

        fn mode(&self) -> MatchMode {
            MatchMode::Layered
        }
    }

    #[test]
    fn claimed_id_is_never_reassigned() {
        let curriculum = Curriculum::new(vec![LessonGroup::new("G", ["one", "two"])]);
        let result = reconcile(&Stubborn(ChapterId::new(3).unwrap()), &curriculum);
        let ids: Vec<_> = result.structure.major_lessons[0]
            .sublessons
            .iter()
            .map(|s| s.chapter_id)
            .collect();
        assert_eq!(ids, vec![Some(ChapterId::new(3).unwrap()), None]);
        assert_eq!(result.report.matched, 1);
        assert_eq!(result.report.unmatched, 1);
        assert_eq!(result.report.by_strategy.get(&Strategy::Exact), Some(&1));
    }

    #[test]
    fn empty_curriculum_yields_empty_structure() {
        let result = reconcile(&Stubborn(ChapterId::new(1).unwrap()), &Curriculum::default());
        assert!(result.structure.major_lessons.is_empty());
        assert_eq!(result.report.total, 0);
        assert!(result.claimed.is_empty());
    }

    #[test]
    fn empty_group_is_kept() {
        let curriculum = Curriculum::new(vec![LessonGroup::new("Empty", Vec::<String>::new())]);
        let result = reconcile(&Stubborn(ChapterId::new(1).unwrap()), &curriculum);
        assert_eq!(result.structure.major_lessons.len(), 1);
        assert!(result.structure.major_lessons[0].sublessons.is_empty());
    }
}
