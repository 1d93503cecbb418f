use async_trait::async_trait;
use mandi_core::MandiError;
use url::Url;

use crate::CONNECTOR_NAME;

/// Transport abstraction so tests can serve canned feeds without a network.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// GET `url` and return the response body.
    async fn fetch(&self, url: &Url) -> Result<String, MandiError>;
}

/// Default fetcher: a plain `reqwest` GET.
#[derive(Clone, Default)]
pub struct ReqwestFetcher {
    http: reqwest::Client,
}

impl ReqwestFetcher {
    /// Wrap an existing HTTP client.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl FeedFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, MandiError> {
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| MandiError::connector(CONNECTOR_NAME, format!("request failed: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MandiError::connector(
                CONNECTOR_NAME,
                format!("status {status} for news feed"),
            ));
        }
        resp.text()
            .await
            .map_err(|e| MandiError::connector(CONNECTOR_NAME, format!("body: {e}")))
    }
}
