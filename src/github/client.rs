//! User search against the GitHub directory with rate-limit awareness

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use tracing::{error, info, warn};

use super::response::SearchResponse;
use super::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use crate::error::{SearchError, TransportError};
use crate::models::{SearchKind, SearchOutcome, SearchQuery, UserRecord};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const SEARCH_USERS_PATH: &str = "/search/users";
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

const RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
const RATE_LIMIT_RESET: &str = "X-RateLimit-Reset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Stateless searcher: each call issues at most one upstream request
pub struct GithubSearcher<T = ReqwestTransport> {
    config: SearchConfig,
    transport: T,
}

impl GithubSearcher<ReqwestTransport> {
    /// Searcher using a blocking `reqwest` client with the configured timeout
    pub fn new(config: SearchConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> GithubSearcher<T> {
    pub fn with_transport(config: SearchConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run `query` against the directory. Never fails: errors are reported in the outcome.
    pub fn search(&self, query: &SearchQuery) -> SearchOutcome {
        self.search_at(query, Utc::now())
    }

    /// Same as [`search`](Self::search) with an explicit clock for rate-limit arithmetic
    pub fn search_at(&self, query: &SearchQuery, now: DateTime<Utc>) -> SearchOutcome {
        if query.text.is_empty() {
            warn!("Empty {} provided", query.kind);
            return SearchOutcome::failure(SearchError::EmptyQuery);
        }

        let request = self.build_request(query);
        let response = match self.transport.get(&request) {
            Ok(response) => response,
            Err(err) => return request_failure(query.kind, err.to_string()),
        };

        if let Some(wait_seconds) = rate_limit_wait(&response, now) {
            warn!("Rate limit exceeded. Waiting for {} seconds", wait_seconds);
            return SearchOutcome::failure(SearchError::RateLimited { wait_seconds });
        }

        if !response.is_success() {
            return request_failure(query.kind, describe_status(response.status));
        }

        let users = match parse_users(&response.body) {
            Ok(users) => users,
            Err(err) => {
                let error = SearchError::Upstream {
                    context: format!("Error searching by {}", query.kind),
                    message: err.to_string(),
                };
                error!("{}", error);
                return SearchOutcome::failure(error);
            }
        };

        info!(
            "{} search for '{}' found {} results",
            capitalize(query.kind.qualifier()),
            query.text,
            users.len()
        );
        SearchOutcome::success(users)
    }

    /// Describe the single GET that `query` translates to
    pub fn build_request(&self, query: &SearchQuery) -> ApiRequest {
        let base = self.config.api_base_url.trim_end_matches('/');
        let url = format!("{}{}", base, SEARCH_USERS_PATH);

        let mut headers = vec![
            ("Accept".to_string(), ACCEPT_HEADER.to_string()),
            ("User-Agent".to_string(), self.config.user_agent.clone()),
        ];
        if let Some(credential) = &query.credential {
            headers.push(("Authorization".to_string(), format!("token {}", credential.expose())));
        }

        ApiRequest {
            url,
            query: vec![("q".to_string(), format!("{} in:{}", query.text, query.kind.qualifier()))],
            headers,
        }
    }
}

/// Seconds to wait when the response signals an exhausted quota, `None` otherwise
fn rate_limit_wait(response: &ApiResponse, now: DateTime<Utc>) -> Option<i64> {
    if StatusCode::from_u16(response.status).ok()? != StatusCode::FORBIDDEN {
        return None;
    }

    let remaining: i64 = response.header(RATE_LIMIT_REMAINING)?.trim().parse().ok()?;
    if remaining != 0 {
        return None;
    }

    let reset = response
        .header(RATE_LIMIT_RESET)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);

    Some((reset - now.timestamp()).max(0))
}

fn parse_users(body: &str) -> Result<Vec<UserRecord>, serde_json::Error> {
    Ok(serde_json::from_str::<SearchResponse>(body)?.into_users())
}

fn request_failure(kind: SearchKind, message: String) -> SearchOutcome {
    let error =
        SearchError::Upstream { context: format!("Request error searching by {}", kind), message };
    error!("{}", error);
    SearchOutcome::failure(error)
}

fn describe_status(status: u16) -> String {
    match StatusCode::from_u16(status).ok().and_then(|s| s.canonical_reason()) {
        Some(reason) => format!("HTTP status {} {}", status, reason),
        None => format!("HTTP status {}", status),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
