use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const APP_DIR_NAME: &str = "github-user-search";
pub const HISTORY_FILENAME: &str = "search-history.jsonl";

/// Platform data location for the history store
///
/// - Linux: `~/.local/share/github-user-search/search-history.jsonl`
/// - macOS: `~/Library/Application Support/github-user-search/search-history.jsonl`
/// - Windows: `%APPDATA%\github-user-search\search-history.jsonl`
pub fn default_history_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_dir.join(APP_DIR_NAME).join(HISTORY_FILENAME))
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
