use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::github::GithubSearcher;
use crate::history::{
    HistoryRecorder, HistoryStats, export_history, load_history, load_recent_history,
};
use crate::models::{HistoryEntry, SearchKind, SearchQuery, TIMESTAMP_FORMAT};
use crate::utils::{AppConfig, ConfigOverrides, format_path_with_tilde, resolve_config};

#[derive(Parser)]
#[command(name = "github-user-search")]
#[command(version)]
#[command(about = "Search GitHub users by email or full name and keep a log of every search", long_about = None)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// History store location (overrides GITHUB_USER_SEARCH_HISTORY)
    #[arg(long, global = true, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up GitHub accounts and record the search
    Search(SearchArgs),
    /// List recorded searches, oldest first
    History {
        /// Only show the most recent N searches
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show statistics about the search history
    Stats,
    /// Write the recorded searches to another file as JSON Lines
    Export {
        /// Destination file, replaced if it exists
        #[arg(long, short, value_name = "PATH")]
        output: PathBuf,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("term").required(true).args(["email", "name"])))]
pub struct SearchArgs {
    /// Match accounts by public email address
    #[arg(long)]
    pub email: Option<String>,

    /// Match accounts by full name
    #[arg(long)]
    pub name: Option<String>,

    /// API token (overrides GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// API base URL (overrides GITHUB_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Do not append this search to the history store
    #[arg(long)]
    pub no_record: bool,
}

impl SearchArgs {
    fn kind_and_text(&self) -> (SearchKind, String) {
        match (&self.email, &self.name) {
            (Some(email), _) => (SearchKind::Email, email.trim().to_string()),
            (None, Some(name)) => (SearchKind::Name, name.trim().to_string()),
            (None, None) => (SearchKind::Name, String::new()),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let history_file = cli.history_file;

    match cli.command {
        Some(Commands::Search(args)) => {
            let config = resolve_config(ConfigOverrides {
                token: args.token.clone(),
                history_file,
                api_url: args.api_url.clone(),
            })?;
            run_search(&config, &args)?;
        }
        Some(Commands::History { limit }) => {
            let config = resolve_config(ConfigOverrides { history_file, ..Default::default() })?;
            show_history(&config, limit)?;
        }
        Some(Commands::Stats) => {
            let config = resolve_config(ConfigOverrides { history_file, ..Default::default() })?;
            show_stats(&config)?;
        }
        Some(Commands::Export { output }) => {
            let config = resolve_config(ConfigOverrides { history_file, ..Default::default() })?;
            run_export(&config, &output)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_search(config: &AppConfig, args: &SearchArgs) -> Result<()> {
    let (kind, text) = args.kind_and_text();
    if text.is_empty() {
        bail!("Please enter a search query");
    }

    let searcher =
        GithubSearcher::new(config.search.clone()).context("Failed to build HTTP client")?;
    let query = SearchQuery::new(kind, text).with_credential(config.credential.clone());
    let outcome = searcher.search(&query);

    if let Some(message) = outcome.error_message() {
        bail!(message);
    }

    println!("Found {} users for {} '{}'", outcome.users.len(), kind, query.text);
    for user in &outcome.users {
        println!("  {:<24} {:<12} {}", user.handle, user.account_type, user.profile_url);
    }

    if !args.no_record {
        let recorder = HistoryRecorder::new(&config.history_path);
        if !recorder.record(kind, &query.text, &outcome.users) {
            eprintln!(
                "Warning: failed to record search in {}",
                format_path_with_tilde(recorder.path())
            );
        }
    }

    Ok(())
}

fn show_history(config: &AppConfig, limit: Option<usize>) -> Result<()> {
    let entries = match limit {
        Some(n) => load_recent_history(&config.history_path, n)?,
        None => load_history(&config.history_path)?,
    };
    if entries.is_empty() {
        println!("No search history available");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", format_entry(entry));
    }

    Ok(())
}

fn format_entry(entry: &HistoryEntry) -> String {
    format!(
        "{}  {:<5}  {}  ->  {} ({})",
        entry.timestamp.format(TIMESTAMP_FORMAT),
        entry.search_kind,
        entry.input_text,
        entry.result_summary,
        entry.result_count
    )
}

fn show_stats(config: &AppConfig) -> Result<()> {
    let entries = load_history(&config.history_path)?;
    let stats = HistoryStats::from_entries(&entries);

    println!("GitHub User Search Statistics");
    println!("=============================");
    println!("Total searches: {}", stats.total_searches);
    println!("  Email searches: {}", stats.email_searches);
    println!("  Name searches: {}", stats.name_searches);
    println!("Total results: {}", stats.total_results);
    println!("Searches with no results: {}", stats.empty_searches);
    println!();
    println!("History file: {}", format_path_with_tilde(&config.history_path));

    if let Some(first) = stats.first_search {
        println!("First search: {}", first.format(TIMESTAMP_FORMAT));
    }
    if let Some(last) = stats.last_search {
        println!("Last search: {}", last.format(TIMESTAMP_FORMAT));
    }

    Ok(())
}

fn run_export(config: &AppConfig, output: &Path) -> Result<()> {
    let exported = export_history(&config.history_path, output)?;
    println!("Exported {} searches to {}", exported, format_path_with_tilde(output));
    Ok(())
}
