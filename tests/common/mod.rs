//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builder for a temporary directory holding a history store
pub struct HistoryStoreBuilder {
    temp_dir: TempDir,
    rows: Vec<String>,
}

impl HistoryStoreBuilder {
    /// Create a new builder with no store file yet
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, rows: Vec::new() }
    }

    /// Path the store lives at (may not exist until `build`)
    pub fn store_path(&self) -> PathBuf {
        self.temp_dir.path().join("search-history.jsonl")
    }

    /// Add a row
    pub fn with_row(mut self, row: HistoryRowBuilder) -> Self {
        self.rows.push(row.to_json());
        self
    }

    /// Add a raw line, valid or not
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.rows.push(line.to_string());
        self
    }

    /// Write the store if any rows were added and return the temp directory
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.store_path();
        if !self.rows.is_empty() {
            let mut content = self.rows.join("\n");
            content.push('\n');
            fs::write(&path, content).expect("Failed to write history store");
        }
        (self.temp_dir, path)
    }
}

impl Default for HistoryStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one history store row
pub struct HistoryRowBuilder {
    timestamp: String,
    kind: String,
    input: String,
    handles: Vec<String>,
}

impl HistoryRowBuilder {
    pub fn new() -> Self {
        Self {
            timestamp: "2025-03-14 09:26:53".to_string(),
            kind: "name".to_string(),
            input: "Ada Lovelace".to_string(),
            handles: Vec::new(),
        }
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn input(mut self, input: &str) -> Self {
        self.input = input.to_string();
        self
    }

    pub fn handles(mut self, handles: &[&str]) -> Self {
        self.handles = handles.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn to_json(&self) -> String {
        let results =
            if self.handles.is_empty() { "No results".to_string() } else { self.handles.join(", ") };
        json!({
            "Timestamp": self.timestamp,
            "Search Type": self.kind,
            "Input": self.input,
            "Results": results,
            "Result Count": self.handles.len(),
        })
        .to_string()
    }
}

impl Default for HistoryRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One upstream search item for the given login
pub fn search_item(login: &str) -> Value {
    json!({
        "login": login,
        "id": 1,
        "html_url": format!("https://github.com/{}", login),
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "type": "User",
        "score": 1.0
    })
}

/// Full `/search/users` body for the given logins
pub fn search_body(logins: &[&str]) -> Value {
    json!({
        "total_count": logins.len(),
        "incomplete_results": false,
        "items": logins.iter().map(|l| search_item(l)).collect::<Vec<_>>(),
    })
}

/// Mount a `/search/users` responder on `server`
pub async fn mount_search(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Read the store back as raw JSON rows
pub fn read_rows(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .expect("Failed to read history store")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("Row is not JSON"))
        .collect()
}
