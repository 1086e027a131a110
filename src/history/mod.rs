//! Durable search history
//!
//! The store is a JSON Lines file: one [`HistoryEntry`](crate::models::HistoryEntry) per line,
//! newest last, keyed by the column names `Timestamp`, `Search Type`, `Input`, `Results`
//! and `Result Count`.
//!
//! Writers only ever append. Each row goes out in a single `write_all` on a file opened in
//! append mode, so concurrent recorders interleave whole rows instead of overwriting each
//! other's copy of the table.

pub mod export;
pub mod format;
pub mod reader;
pub mod recorder;
pub mod stats;

pub use export::export_history;
pub use reader::{load_history, load_recent_history, scan_history};
pub use recorder::HistoryRecorder;
pub use stats::HistoryStats;
