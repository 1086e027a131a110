//! History Recorder: one appended line per completed search

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info};

use crate::error::HistoryError;
use crate::models::{HistoryEntry, SearchKind, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecorder {
    path: PathBuf,
}

impl HistoryRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a summary of this search to the store
    ///
    /// Returns `false`, after logging the cause, on any failure.
    pub fn record(&self, kind: SearchKind, input_text: &str, users: &[UserRecord]) -> bool {
        match self.try_record(kind, input_text, users) {
            Ok(_) => {
                info!("Results saved to '{}'", self.path.display());
                true
            }
            Err(err) => {
                error!("Error saving search history: {}", err);
                false
            }
        }
    }

    /// Like [`record`](Self::record) but returns the written row or the failure
    pub fn try_record(
        &self,
        kind: SearchKind,
        input_text: &str,
        users: &[UserRecord],
    ) -> Result<HistoryEntry, HistoryError> {
        let entry = HistoryEntry::new(Local::now().naive_local(), kind, input_text, users);
        self.append(&entry)?;
        Ok(entry)
    }

    /// Append `entry` as the last row with a single write; the file is never rewritten
    pub fn append(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|source| HistoryError::CreateDir { path: parent.to_path_buf(), source })?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| HistoryError::Open { path: self.path.clone(), source })?;

        let mut line = Vec::new();
        let needs_separator = ends_mid_line(&mut file)
            .map_err(|source| HistoryError::Read { path: self.path.clone(), source })?;
        if needs_separator {
            // A previous writer died mid-line; keep the new row on its own line
            line.push(b'\n');
        }
        serde_json::to_writer(&mut line, entry)?;
        line.push(b'\n');

        file.write_all(&line)
            .map_err(|source| HistoryError::Write { path: self.path.clone(), source })?;

        Ok(())
    }
}

fn ends_mid_line(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
