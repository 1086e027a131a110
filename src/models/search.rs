use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Directory field a search is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Email,
    Name,
}

impl SearchKind {
    /// Qualifier value used in the upstream `in:` scope
    pub fn qualifier(self) -> &'static str {
        match self {
            SearchKind::Email => "email",
            SearchKind::Name => "name",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.qualifier())
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(SearchKind::Email),
            "name" => Ok(SearchKind::Name),
            other => Err(format!("unknown search type '{}' (expected 'email' or 'name')", other)),
        }
    }
}

/// Opaque API token. The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Builds a credential from optional user input, treating blank input as absent
    pub fn from_optional(token: Option<String>) -> Option<Self> {
        token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub kind: SearchKind,
    pub text: String,
    pub credential: Option<Credential>,
}

impl SearchQuery {
    pub fn new(kind: SearchKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into(), credential: None }
    }

    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }
}

/// One account summary as returned by the directory search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub handle: String,
    pub profile_url: String,
    pub avatar_url: String,
    pub account_type: String,
}

/// Result of a search attempt. A present `error` marks failure regardless of `users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub users: Vec<UserRecord>,
    pub error: Option<SearchError>,
}

impl SearchOutcome {
    pub fn success(users: Vec<UserRecord>) -> Self {
        Self { users, error: None }
    }

    pub fn failure(error: SearchError) -> Self {
        Self { users: Vec::new(), error: Some(error) }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_kind_parses_case_insensitively() {
        assert_eq!("Email".parse::<SearchKind>(), Ok(SearchKind::Email));
        assert_eq!(" name ".parse::<SearchKind>(), Ok(SearchKind::Name));
        assert!("login".parse::<SearchKind>().is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("ghp_secret");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.expose(), "ghp_secret");
    }

    #[test]
    fn test_blank_credential_is_absent() {
        assert!(Credential::from_optional(Some("   ".to_string())).is_none());
        assert!(Credential::from_optional(None).is_none());
        assert_eq!(
            Credential::from_optional(Some(" abc ".to_string())),
            Some(Credential::new("abc"))
        );
    }

    #[test]
    fn test_empty_success_is_not_failure() {
        let outcome = SearchOutcome::success(Vec::new());
        assert!(outcome.is_success());
        assert!(outcome.error_message().is_none());

        let failed = SearchOutcome::failure(SearchError::EmptyQuery);
        assert!(!failed.is_success());
        assert!(failed.users.is_empty());
    }
}
