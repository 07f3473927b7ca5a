// Fetch seam - exactly one GET per call, parsed JSON or a typed error
use async_trait::async_trait;

/// Why a fetch produced no usable JSON. There are no retries anywhere in
/// this layer; a single failure surfaces directly to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned a malformed body: {reason}")]
    Malformed { url: String, reason: String },
}

#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issue one HTTP GET against `url` and return the parsed JSON body.
    /// Errors on network failure, non-2xx status, or an unparseable body.
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}
