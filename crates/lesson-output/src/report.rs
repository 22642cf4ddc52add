//! Review report: what an operator needs to fix after a run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lesson_map::{MatcherSettings, Reconciliation, ReviewHint, Strategy, review_hints};
use lesson_model::{Catalog, ChapterId, MatchMode};
use serde::Serialize;

/// Hints below this Jaro-Winkler similarity are not offered.
pub const DEFAULT_HINT_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub by_strategy: BTreeMap<Strategy, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnclaimedChapter {
    pub id: ChapterId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub generated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub mode: MatchMode,
    pub settings: MatcherSettings,
    pub summary: ReportSummary,
    pub unmatched: Vec<ReviewHint>,
    pub unclaimed_chapters: Vec<UnclaimedChapter>,
}

impl ReviewReport {
    pub fn build(
        reconciliation: &Reconciliation,
        catalog: &Catalog,
        language: Option<&str>,
        settings: MatcherSettings,
        hint_threshold: f32,
    ) -> Self {
        let report = &reconciliation.report;
        Self {
            generated_at: Utc::now(),
            language: language.map(str::to_string),
            mode: report.mode,
            settings,
            summary: ReportSummary {
                total: report.total,
                matched: report.matched,
                unmatched: report.unmatched,
                by_strategy: report.by_strategy.clone(),
            },
            unmatched: review_hints(reconciliation, catalog, hint_threshold),
            unclaimed_chapters: reconciliation
                .unclaimed(catalog)
                .map(|c| UnclaimedChapter {
                    id: c.id,
                    title: c.title.clone(),
                    url: c.url.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}
