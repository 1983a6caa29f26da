use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the planning core.
/// Expected edge cases (absent files, unknown block ids, empty subject
/// lists) never surface here; only genuine storage faults do.
#[derive(Debug, Error)]
pub enum HarmonyError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HarmonyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarmonyError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialize(what: &'static str, source: serde_json::Error) -> Self {
        HarmonyError::Serialize { what, source }
    }
}
