//! Advisory suggestions for titles the matcher left unresolved.
//!
//! Hints never change an assignment. They point a curator at the unclaimed
//! chapter whose title reads most like the orphaned entry, so the override
//! table can be extended by hand.

use lesson_model::{Catalog, ChapterId};
use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use serde::Serialize;

use crate::reconcile::Reconciliation;
use crate::text::normalize;

/// Closest unclaimed chapter for an unmatched title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub chapter_id: ChapterId,
    pub chapter_title: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewHint {
    pub group: String,
    pub title: String,
    pub suggestion: Option<Suggestion>,
}

/// One hint per unmatched entry, in curriculum order.
///
/// Candidates below `min_similarity` are not suggested. Ties keep the chapter
/// that comes first in the catalog.
pub fn review_hints(
    reconciliation: &Reconciliation,
    catalog: &Catalog,
    min_similarity: f32,
) -> Vec<ReviewHint> {
    let candidates: Vec<(ChapterId, &str, String)> = reconciliation
        .unclaimed(catalog)
        .map(|c| (c.id, c.title.as_str(), normalize(&c.title)))
        .collect();

    reconciliation
        .report
        .unmatched_entries()
        .map(|entry| {
            let needle = normalize(&entry.title);
            let mut best: Option<Suggestion> = None;
            for (id, title, normalized) in &candidates {
                let score = jaro_similarity(needle.chars(), normalized.chars()) as f32;
                if score < min_similarity {
                    continue;
                }
                if best.as_ref().is_none_or(|b| score > b.similarity) {
                    best = Some(Suggestion {
                        chapter_id: *id,
                        chapter_title: (*title).to_string(),
                        similarity: score,
                    });
                }
            }
            ReviewHint {
                group: entry.group.clone(),
                title: entry.title.clone(),
                suggestion: best,
            }
        })
        .collect()
}
