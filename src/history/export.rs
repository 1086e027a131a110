//! Copy of the history table for use outside the tool

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use super::reader::scan_history;

/// Write every well-formed row of `store` to `output` as JSON Lines
///
/// Rows keep the store's column names. The export is written next to `output` and renamed
/// into place, so a failed export never leaves a half-written file behind. Returns the number
/// of rows exported.
pub fn export_history(store: &Path, output: &Path) -> Result<usize> {
    if !store.exists() {
        warn!("No search results file exists yet: {}", store.display());
        bail!("No search results file exists yet");
    }

    let temp_name = format!(
        "{}.tmp",
        output.file_name().map_or_else(|| "export".into(), |n| n.to_string_lossy())
    );
    let temp_path = output.with_file_name(temp_name);

    let exported = match write_rows(store, &temp_path) {
        Ok(count) => count,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    fs::rename(&temp_path, output)
        .with_context(|| format!("Failed to move export into place: {}", output.display()))?;

    info!("Exported {} searches to '{}'", exported, output.display());
    Ok(exported)
}

fn write_rows(store: &Path, temp_path: &Path) -> Result<usize> {
    let file = File::create(temp_path)
        .with_context(|| format!("Failed to create export file: {}", temp_path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut exported = 0;
    scan_history(store, |entry| {
        serde_json::to_writer(&mut writer, &entry).context("Failed to serialize history row")?;
        writer.write_all(b"\n").context("Failed to write export file")?;
        exported += 1;
        Ok(())
    })?;

    writer.flush().context("Failed to write export file")?;
    Ok(exported)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::history::{HistoryRecorder, load_history};
    use crate::models::SearchKind;

    #[test]
    fn test_export_copies_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("history.jsonl");
        let recorder = HistoryRecorder::new(&store);
        assert!(recorder.record(SearchKind::Email, "ada@example.com", &[]));
        assert!(recorder.record(SearchKind::Name, "Grace Hopper", &[]));

        let output = dir.path().join("export.jsonl");
        assert_eq!(export_history(&store, &output).unwrap(), 2);

        let rows = load_history(&output).unwrap();
        assert_eq!(rows, load_history(&store).unwrap());
        assert!(!dir.path().join("export.jsonl.tmp").exists());
    }

    #[test]
    fn test_export_drops_malformed_rows() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("history.jsonl");
        let recorder = HistoryRecorder::new(&store);
        assert!(recorder.record(SearchKind::Name, "Ada", &[]));
        fs::write(&store, fs::read_to_string(&store).unwrap() + "{torn\n").unwrap();
        assert!(recorder.record(SearchKind::Name, "Grace", &[]));

        let output = dir.path().join("export.jsonl");
        assert_eq!(export_history(&store, &output).unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_missing_store_is_refused() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("export.jsonl");

        let err = export_history(&dir.path().join("absent.jsonl"), &output).unwrap_err();
        assert!(err.to_string().contains("No search results file exists yet"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("history.jsonl");
        assert!(HistoryRecorder::new(&store).record(SearchKind::Name, "Ada", &[]));

        let output = dir.path().join("missing-dir").join("export.jsonl");
        assert!(export_history(&store, &output).is_err());
        assert!(!output.exists());
    }
}
