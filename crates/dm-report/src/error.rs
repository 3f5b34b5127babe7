//! Report error types.

use std::path::PathBuf;

use dm_core::enums::FailureKind;
use thiserror::Error;

/// Errors that can occur while loading research JSON or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input is not valid JSON, or not the expected document shape.
    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other filesystem failure on `path`.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Failure category for callers that branch on the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::FileNotFound { .. } => FailureKind::FileNotFound,
            Self::InvalidJson { .. } => FailureKind::InvalidJson,
            Self::Io { .. } | Self::Serialize(_) => FailureKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
