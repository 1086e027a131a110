use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::models::HistoryEntry;

/// Malformed lines in a row before the store is treated as corrupt
const CORRUPT_RUN_LENGTH: usize = 100;

/// Running count of good and bad lines seen while scanning the store
#[derive(Debug, Default)]
struct LineTally {
    parsed: usize,
    malformed: usize,
    malformed_run: usize,
}

impl LineTally {
    fn accept(&mut self) {
        self.parsed += 1;
        self.malformed_run = 0;
    }

    fn reject(&mut self, line_number: usize, err: &serde_json::Error) -> Result<()> {
        warn!("Skipping malformed history row at line {}: {}", line_number, err);
        self.malformed += 1;
        self.malformed_run += 1;

        if self.malformed_run >= CORRUPT_RUN_LENGTH {
            bail!(
                "Too many consecutive parse errors ({}) in history store - file may be corrupted",
                self.malformed_run
            );
        }
        Ok(())
    }

    /// The store is rejected once malformed lines outnumber good ones
    fn finish(self) -> Result<()> {
        if self.malformed > self.parsed {
            let total = self.parsed + self.malformed;
            bail!(
                "Too many parse failures in history store: {} of {} lines failed ({:.1}%)",
                self.malformed,
                total,
                self.malformed as f64 * 100.0 / total as f64
            );
        }
        if self.malformed > 0 {
            info!("Loaded history store: {} rows ({} skipped)", self.parsed, self.malformed);
        }
        Ok(())
    }
}

/// Feed every well-formed row of the store to `visit`, oldest first
///
/// Returns `false` without calling `visit` when the store does not exist. The file is read
/// line by line, so its size is bounded only by the disk.
pub fn scan_history<F>(path: &Path, mut visit: F) -> Result<bool>
where
    F: FnMut(HistoryEntry) -> Result<()>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to open history store: {}", path.display()));
        }
    };

    let mut tally = LineTally::default();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read history store: {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HistoryEntry>(&line) {
            Ok(entry) => {
                tally.accept();
                visit(entry)?;
            }
            Err(e) => tally.reject(index + 1, &e)?,
        }
    }

    tally.finish()?;
    Ok(true)
}

/// Every row of the history store in file order. A missing store is an empty history.
pub fn load_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    let mut entries = Vec::new();
    scan_history(path, |entry| {
        entries.push(entry);
        Ok(())
    })?;
    Ok(entries)
}

/// The newest `limit` rows, oldest first, holding at most `limit` rows in memory
pub fn load_recent_history(path: &Path, limit: usize) -> Result<Vec<HistoryEntry>> {
    let mut window = VecDeque::with_capacity(limit.min(1024));
    scan_history(path, |entry| {
        if limit > 0 {
            if window.len() == limit {
                window.pop_front();
            }
            window.push_back(entry);
        }
        Ok(())
    })?;
    Ok(window.into())
}
