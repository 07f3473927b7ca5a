// reqwest-backed implementation of the fetch seam
use crate::application::json_fetcher::{FetchError, JsonFetcher};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpJsonFetcher {
    client: reqwest::Client,
}

impl HttpJsonFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpJsonFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Malformed {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}
