use async_trait::async_trait;

use crate::MandiError;
use crate::model::market::{HistoryRequest, PriceQuote};
use crate::model::news::{NewsItem, NewsQuery};
use crate::model::series::TimeSeries;
pub use mandi_types::ConnectorKey;

/// Focused role trait for connectors that provide historical closes.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch the close series for `symbol` over the requested period.
    ///
    /// An empty series is a valid answer (no bars in the window); errors are
    /// reserved for transport or provider failures.
    async fn history(&self, symbol: &str, req: HistoryRequest) -> Result<TimeSeries, MandiError>;
}

/// Focused role trait for connectors that provide live quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the latest price and previous close for `symbol`.
    async fn quote(&self, symbol: &str) -> Result<PriceQuote, MandiError>;
}

/// Focused role trait for connectors that provide news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch at most `query.limit` items matching any of the query terms.
    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MandiError>;
}

/// Main connector trait implemented by every data provider.
///
/// Capabilities are advertised by returning a trait object from the matching
/// `as_*_provider` method; the orchestrator skips connectors that return `None`.
pub trait MandiConnector: Send + Sync {
    /// A stable identifier used in logs and error tagging (e.g. "mandi-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise quote capability.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// Advertise news capability.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}
