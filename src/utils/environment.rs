use std::env;
use std::path::PathBuf;

use anyhow::Result;

use super::paths::default_history_path;
use crate::github::SearchConfig;
use crate::models::Credential;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const HISTORY_PATH_ENV: &str = "GITHUB_USER_SEARCH_HISTORY";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Values given on the command line; each one wins over its environment variable
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub history_file: Option<PathBuf>,
    pub api_url: Option<String>,
}

/// Fully resolved settings handed to the search and history components
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub history_path: PathBuf,
    pub credential: Option<Credential>,
    pub search: SearchConfig,
}

/// Resolve configuration: CLI flag, then environment variable, then default
pub fn resolve_config(overrides: ConfigOverrides) -> Result<AppConfig> {
    resolve_config_internal(overrides, |key| env::var(key).ok())
}

pub(crate) fn resolve_config_internal<F>(overrides: ConfigOverrides, lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let history_path =
        match overrides.history_file.or_else(|| non_blank(HISTORY_PATH_ENV).map(PathBuf::from)) {
            Some(path) => path,
            None => default_history_path()?,
        };

    let credential = Credential::from_optional(overrides.token.or_else(|| lookup(TOKEN_ENV)));

    let mut search = SearchConfig::default();
    if let Some(url) = overrides.api_url.or_else(|| non_blank(API_URL_ENV)) {
        search.api_base_url = url;
    }

    Ok(AppConfig { history_path, credential, search })
}
