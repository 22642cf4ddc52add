#![deny(unsafe_code)]

use std::path::PathBuf;

use lesson_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid contents in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    #[error("unknown language {name:?} (available: {available})")]
    UnknownLanguage { name: String, available: String },

    #[error("no {what} given; pass a path or choose a built-in language")]
    MissingInput { what: &'static str },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(path: impl Into<PathBuf>, source: ModelError) -> Self {
        Self::Invalid {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
