use serde::Deserialize;

use crate::models::UserRecord;

/// Body of `GET /search/users`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

/// A single account in the search results
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl From<SearchItem> for UserRecord {
    fn from(item: SearchItem) -> Self {
        UserRecord {
            handle: item.login,
            profile_url: item.html_url,
            avatar_url: item.avatar_url,
            account_type: item.account_type,
        }
    }
}

impl SearchResponse {
    /// Consume the payload into records, keeping upstream order
    pub fn into_users(self) -> Vec<UserRecord> {
        self.items.unwrap_or_default().into_iter().map(UserRecord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_items_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"total_count":0}"#).unwrap();
        assert!(response.into_users().is_empty());

        let response: SearchResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(response.into_users().is_empty());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "login": "octocat",
                "id": 583231,
                "html_url": "https://github.com/octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "type": "User",
                "score": 1.0
            }]
        }"#;

        let users = serde_json::from_str::<SearchResponse>(json).unwrap().into_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].handle, "octocat");
        assert_eq!(users[0].account_type, "User");
    }

    #[test]
    fn test_item_missing_login_is_rejected() {
        let json = r#"{"items":[{"html_url":"u","avatar_url":"a","type":"User"}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }
}
