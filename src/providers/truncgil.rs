use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::FeedError;
use crate::feed::{QuoteFeed, RawDocument};

// Upstream calls are short-lived; anything slower is treated as a network
// failure and handled by the cache's stale-or-fallback path.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Quote feed backed by the Truncgil finance aggregator.
pub struct TruncgilFeed {
    base_url: String,
}

impl TruncgilFeed {
    pub fn new(base_url: &str) -> Self {
        TruncgilFeed {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl QuoteFeed for TruncgilFeed {
    async fn fetch_document(&self) -> Result<RawDocument, FeedError> {
        let url = format!("{}/today.json", self.base_url);
        debug!("Requesting quote document from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("sarraf/0.2")
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let response = client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?;

        // Decode from text so a malformed body maps to Decode, not Network.
        let text = response.text().await?;
        let document: RawDocument = serde_json::from_str(&text)?;
        Ok(document)
    }
}
