// User directory service - Use case for populating the selector
use crate::application::json_fetcher::{FetchError, JsonFetcher};
use crate::domain::user::UserSummary;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserDirectoryService {
    fetcher: Arc<dyn JsonFetcher>,
}

impl UserDirectoryService {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch the user list and map each entry to a `UserSummary`.
    /// Entries without a usable `user_id` and `name` are skipped.
    pub async fn list_users(&self, list_url: &str) -> Result<Vec<UserSummary>, FetchError> {
        let body = self.fetcher.fetch_json(list_url).await?;

        let mut users = Vec::new();
        for entry in body.as_array().into_iter().flatten() {
            // user_id arrives as a number from some deployments and as a
            // string from others; both become the option value verbatim.
            let user_id = match entry.get("user_id") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };
            let name = entry.get("name").and_then(|v| v.as_str());

            if let (Some(user_id), Some(name)) = (user_id, name) {
                let avatar_url = entry
                    .get("avatar_url")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
                users.push(UserSummary::new(user_id, name.to_string(), avatar_url));
            }
        }

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedFetcher(serde_json::Value);

    #[async_trait]
    impl JsonFetcher for FixedFetcher {
        async fn fetch_json(&self, _url: &str) -> Result<serde_json::Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_one_user_per_entry_with_matching_ids() {
        let fetcher = Arc::new(FixedFetcher(json!([
            {"user_id": 10, "name": "User 10"},
            {"user_id": 11, "name": "User 11", "avatar_url": "/api/images/users/11"},
            {"user_id": "141", "name": "User 141"},
        ])));
        let service = UserDirectoryService::new(fetcher);

        let users = service.list_users("http://api/users").await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].user_id, "10");
        assert_eq!(users[1].user_id, "11");
        assert_eq!(users[2].user_id, "141");
        assert_eq!(users[1].avatar_url.as_deref(), Some("/api/images/users/11"));
        assert_eq!(users[0].avatar_url, None);
    }

    #[tokio::test]
    async fn test_entries_missing_fields_are_skipped() {
        let fetcher = Arc::new(FixedFetcher(json!([
            {"user_id": 10, "name": "User 10"},
            {"name": "nameless"},
            {"user_id": 12},
        ])));
        let service = UserDirectoryService::new(fetcher);

        let users = service.list_users("http://api/users").await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "User 10");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        struct FailingFetcher;

        #[async_trait]
        impl JsonFetcher for FailingFetcher {
            async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
                Err(FetchError::Status {
                    url: url.to_string(),
                    status: 500,
                })
            }
        }

        let service = UserDirectoryService::new(Arc::new(FailingFetcher));
        assert!(service.list_users("http://api/users").await.is_err());
    }
}
