use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::search::{SearchKind, UserRecord};

/// Sentinel stored in the Results column when a search matched nobody
pub const NO_RESULTS: &str = "No results";

/// Timestamp layout used in the Timestamp column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the search history store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(
        rename = "Timestamp",
        serialize_with = "crate::history::format::serialize_timestamp",
        deserialize_with = "crate::history::format::deserialize_timestamp"
    )]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "Search Type")]
    pub search_kind: SearchKind,
    #[serde(rename = "Input")]
    pub input_text: String,
    #[serde(rename = "Results")]
    pub result_summary: String,
    #[serde(rename = "Result Count")]
    pub result_count: usize,
}

impl HistoryEntry {
    /// Summarize a search into a row stamped with `timestamp` (truncated to whole seconds)
    pub fn new(
        timestamp: NaiveDateTime,
        search_kind: SearchKind,
        input_text: &str,
        users: &[UserRecord],
    ) -> Self {
        let result_summary = if users.is_empty() {
            NO_RESULTS.to_string()
        } else {
            users.iter().map(|u| u.handle.as_str()).collect::<Vec<_>>().join(", ")
        };

        Self {
            timestamp: crate::history::format::truncate_to_seconds(timestamp),
            search_kind,
            input_text: input_text.to_string(),
            result_summary,
            result_count: users.len(),
        }
    }
}
