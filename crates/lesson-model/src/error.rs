use thiserror::Error;

use crate::ids::ChapterId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("chapter id must be a positive integer, got {0}")]
    InvalidChapterId(u64),
    #[error("chapter id {id} appears more than once in the catalog (titles: {first:?}, {second:?})")]
    DuplicateChapterId {
        id: ChapterId,
        first: String,
        second: String,
    },
    #[error("lesson group #{index} has an empty name")]
    EmptyGroupName { index: usize },
    #[error("override title {0:?} is listed more than once")]
    DuplicateOverride(String),
    #[error("unknown {kind} {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
