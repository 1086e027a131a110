//! GitHub User Search - look up GitHub accounts and keep a log of every search
//!
//! The crate is a two-stage pipeline:
//!
//! - [`GithubSearcher`] queries GitHub's user-search endpoint by email or full name,
//!   honors the rate-limit headers, and normalizes the answer into a [`SearchOutcome`].
//!   It never returns `Err`; failures travel in [`SearchOutcome::error`].
//! - [`HistoryRecorder`] appends one summarized row per completed search to a JSON Lines
//!   store and reports success as a `bool`.
//!
//! # Example
//!
//! ```no_run
//! use github_user_search::{GithubSearcher, HistoryRecorder, SearchConfig, SearchKind, SearchQuery};
//!
//! let searcher = GithubSearcher::new(SearchConfig::default())?;
//! let query = SearchQuery::new(SearchKind::Name, "Ada Lovelace");
//! let outcome = searcher.search(&query);
//!
//! if outcome.is_success() {
//!     let recorder = HistoryRecorder::new("search-history.jsonl");
//!     recorder.record(query.kind, &query.text, &outcome.users);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod error;
pub mod github;
pub mod history;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use error::{HistoryError, SearchError, TransportError};
pub use github::{GithubSearcher, SearchConfig};
pub use history::{HistoryRecorder, HistoryStats, export_history, load_history};
pub use models::{Credential, HistoryEntry, SearchKind, SearchOutcome, SearchQuery, UserRecord};
