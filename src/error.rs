//! Error types for the search and recording pipeline.
//!
//! None of these cross the core boundary as `Err`: searches report a [`SearchError`]
//! inside `SearchOutcome`, and recording collapses a [`HistoryError`] into `false`
//! after logging it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a search produced no usable result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("No query provided")]
    EmptyQuery,

    #[error(
        "GitHub API rate limit exceeded. Try again in {wait_seconds} seconds or use a token."
    )]
    RateLimited { wait_seconds: i64 },

    #[error("{context}: {message}")]
    Upstream { context: String, message: String },
}

impl SearchError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SearchError::RateLimited { .. })
    }
}

/// Failure while appending to the history store
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to create history directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open history store {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read history store {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write history store {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize history entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Network-level failure reported by a `Transport`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}
