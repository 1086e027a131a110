//! Data models for GitHub user searches and their recorded history.
//!
//! - [`SearchQuery`] - What to look up, which field to match, and an optional [`Credential`]
//! - [`UserRecord`] - One account summary from the directory search
//! - [`SearchOutcome`] - Users found, or the error that stopped the search
//! - [`HistoryEntry`] - One row of the durable search history
//!
//! History rows serialize with the store's column names (`Timestamp`, `Search Type`, ...)
//! using the helpers in `history::format`.

pub mod history;
pub mod search;

pub use history::{HistoryEntry, NO_RESULTS, TIMESTAMP_FORMAT};
pub use search::{Credential, SearchKind, SearchOutcome, SearchQuery, UserRecord};
