//! mandi-gnews
//!
//! Connector that implements `NewsProvider` on top of the Google News RSS search
//! endpoint, localised for India (`hl=en-IN`, `gl=IN`).
#![warn(missing_docs)]

/// Transport used to download feeds.
pub mod fetcher;
/// RSS document parsing.
pub mod rss;

use std::sync::Arc;

use async_trait::async_trait;
use mandi_core::{
    MandiError, NewsItem, NewsQuery,
    connector::{ConnectorKey, MandiConnector, NewsProvider},
};
use url::Url;

use fetcher::{FeedFetcher, ReqwestFetcher};

pub(crate) const CONNECTOR_NAME: &str = "mandi-gnews";

/// Google News RSS search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://news.google.com/rss/search";

/// News connector backed by the Google News RSS search.
pub struct GoogleNewsConnector {
    fetcher: Arc<dyn FeedFetcher>,
    base_url: Url,
}

impl GoogleNewsConnector {
    /// Static connector key for orchestrator configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(CONNECTOR_NAME);

    /// Connector with a default `reqwest` client against the public endpoint.
    ///
    /// # Errors
    /// Returns `MandiError::Other` if the HTTP client cannot be built.
    pub fn try_new_default() -> Result<Self, MandiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| MandiError::Other(format!("http client: {e}")))?;
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(http)), DEFAULT_BASE_URL)
    }

    /// Connector using `http` against `base_url` (tests point this at a local server).
    ///
    /// # Errors
    /// Returns `MandiError::InvalidArg` if `base_url` does not parse.
    pub fn with_reqwest_client(http: reqwest::Client, base_url: &str) -> Result<Self, MandiError> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(http)), base_url)
    }

    /// Connector with an injected transport.
    ///
    /// # Errors
    /// Returns `MandiError::InvalidArg` if `base_url` does not parse.
    pub fn with_fetcher(fetcher: Arc<dyn FeedFetcher>, base_url: &str) -> Result<Self, MandiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MandiError::InvalidArg(format!("news base url {base_url}: {e}")))?;
        Ok(Self { fetcher, base_url })
    }

    /// Search URL for `query`: the OR-ed quoted terms plus the India locale.
    #[must_use]
    pub fn feed_url(&self, query: &NewsQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("q", &query.to_query_string())
            .append_pair("hl", "en-IN")
            .append_pair("gl", "IN")
            .append_pair("ceid", "IN:en");
        url
    }
}

impl MandiConnector for GoogleNewsConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Google News"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl NewsProvider for GoogleNewsConnector {
    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MandiError> {
        if query.terms.is_empty() {
            return Err(MandiError::InvalidArg("news query has no terms".into()));
        }
        if query.limit == 0 {
            return Ok(Vec::new());
        }
        let url = self.feed_url(query);
        let body = self.fetcher.fetch(&url).await?;
        let items = rss::parse_feed(&body, query.limit)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = items.len(), "parsed news feed");
        Ok(items)
    }
}
