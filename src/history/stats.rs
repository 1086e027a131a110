use chrono::NaiveDateTime;

use crate::models::{HistoryEntry, SearchKind};

/// Aggregate view over the history store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_searches: usize,
    pub email_searches: usize,
    pub name_searches: usize,
    pub total_results: usize,
    pub empty_searches: usize,
    pub first_search: Option<NaiveDateTime>,
    pub last_search: Option<NaiveDateTime>,
}

impl HistoryStats {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let mut stats = Self { total_searches: entries.len(), ..Self::default() };

        for entry in entries {
            match entry.search_kind {
                SearchKind::Email => stats.email_searches += 1,
                SearchKind::Name => stats.name_searches += 1,
            }
            stats.total_results += entry.result_count;
            if entry.result_count == 0 {
                stats.empty_searches += 1;
            }
        }

        stats.first_search = entries.iter().map(|e| e.timestamp).min();
        stats.last_search = entries.iter().map(|e| e.timestamp).max();
        stats
    }
}
