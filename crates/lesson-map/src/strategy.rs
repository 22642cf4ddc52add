//! Named matching strategies and the order each mode tries them in.

use std::fmt;

use lesson_model::MatchMode;
use serde::{Deserialize, Serialize};

/// The rule that produced (or would produce) a chapter assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Curated title is pinned to an id by the override table.
    Override,
    /// Normalized titles are equal.
    Exact,
    /// Chapter title contains the curated title; part-number agreement ranks first.
    Containment,
    /// Curated title contains the chapter title.
    ReverseContainment,
    /// Either title contains the other; first in catalog order.
    BidirectionalContainment,
    /// Enough shared keywords, with a bonus for agreeing part numbers.
    KeywordOverlap,
    /// A long keyword appears anywhere in the chapter title.
    WeakSubstring,
    /// Next unclaimed chapter in catalog order, without textual evidence.
    Positional,
}

const LAYERED_ORDER: [Strategy; 6] = [
    Strategy::Override,
    Strategy::Exact,
    Strategy::Containment,
    Strategy::ReverseContainment,
    Strategy::KeywordOverlap,
    Strategy::WeakSubstring,
];

const POSITIONAL_ORDER: [Strategy; 4] = [
    Strategy::Override,
    Strategy::Exact,
    Strategy::BidirectionalContainment,
    Strategy::Positional,
];

impl Strategy {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Exact => "exact",
            Self::Containment => "containment",
            Self::ReverseContainment => "reverse_containment",
            Self::BidirectionalContainment => "bidirectional_containment",
            Self::KeywordOverlap => "keyword_overlap",
            Self::WeakSubstring => "weak_substring",
            Self::Positional => "positional",
        }
    }

    /// Whether the assignment is backed by the titles' text.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        !matches!(self, Self::Positional)
    }

    /// Strategies tried for `mode`, in priority order.
    pub fn chain(mode: MatchMode) -> &'static [Strategy] {
        match mode {
            MatchMode::Layered => &LAYERED_ORDER,
            MatchMode::Positional => &POSITIONAL_ORDER,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
