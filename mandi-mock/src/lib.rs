//! Deterministic connectors for tests and demos.
//!
//! [`MockConnector`] serves static fixtures for the dashboard watch-list;
//! [`DynamicMockConnector`] lets a test script every call through a controller.
use std::time::Duration;

use async_trait::async_trait;
use mandi_core::connector::{HistoryProvider, MandiConnector, NewsProvider, QuoteProvider};
use mandi_core::{HistoryRequest, MandiError, NewsItem, NewsQuery, PriceQuote, TimeSeries};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Symbol that makes every fixture call fail.
pub const FAIL_SYMBOL: &str = "FAIL";
/// Symbol that makes every fixture call stall for [`TIMEOUT_DELAY`].
pub const TIMEOUT_SYMBOL: &str = "TIMEOUT";
/// Stall applied to [`TIMEOUT_SYMBOL`]; long enough to trip a short provider timeout.
pub const TIMEOUT_DELAY: Duration = Duration::from_millis(200);

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// History: `GC=F`, `SI=F`, `CL=F` carry offset-aware New York midnights, `INR=X`
/// naive London midnights, so charts exercise key normalisation.
pub struct MockConnector {
    quotes: bool,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self { quotes: true }
    }

    /// A mock that advertises history and news but no live quotes.
    #[must_use]
    pub const fn without_quotes() -> Self {
        Self { quotes: false }
    }

    fn not_found(what: &str) -> MandiError {
        MandiError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(
        symbol: &str,
        capability: &'static str,
    ) -> Result<(), MandiError> {
        match symbol {
            FAIL_SYMBOL => Err(MandiError::connector(
                "mandi-mock",
                format!("forced failure: {capability}"),
            )),
            TIMEOUT_SYMBOL => {
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl MandiConnector for MockConnector {
    fn name(&self) -> &'static str {
        "mandi-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.quotes.then_some(self as &dyn QuoteProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &str) -> Result<PriceQuote, MandiError> {
        Self::maybe_fail_or_timeout(symbol, "quote").await?;
        fixtures::quotes::by_symbol(symbol)
            .ok_or_else(|| Self::not_found(&format!("quote for {symbol}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, symbol: &str, _req: HistoryRequest) -> Result<TimeSeries, MandiError> {
        Self::maybe_fail_or_timeout(symbol, "history").await?;
        fixtures::history::by_symbol(symbol)
            .ok_or_else(|| Self::not_found(&format!("history for {symbol}")))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MandiError> {
        if let Some(term) = query
            .terms
            .iter()
            .find(|t| *t == FAIL_SYMBOL || *t == TIMEOUT_SYMBOL)
        {
            Self::maybe_fail_or_timeout(term, "news").await?;
        }
        Ok(fixtures::news::items(query))
    }
}
