#![deny(unsafe_code)]

//! Reconciliation of a curated lesson hierarchy against a scraped chapter
//! catalog.

pub mod claims;
pub mod engine;
pub mod hints;
pub mod overrides;
pub mod reconcile;
pub mod settings;
pub mod strategy;
pub mod text;

pub use claims::ClaimedIds;
pub use engine::{MatchEngine, MatchOutcome, StrategyProbe, TitleMatcher};
pub use hints::{ReviewHint, Suggestion, review_hints};
pub use overrides::OverrideTable;
pub use reconcile::{EntryTrace, ReconcileReport, Reconciliation, reconcile};
pub use settings::MatcherSettings;
pub use strategy::Strategy;
pub use text::{is_part_two_or_higher, keywords, normalize};
