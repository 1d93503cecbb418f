#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use mandi_core::MandiError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, MandiError>;
}

/// Quotes abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfQuotes: Send + Sync {
    /// Fetch quotes for a batch of symbols.
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, MandiError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` with a cookie-enabled HTTP client and a browser user agent.
    ///
    /// # Errors
    /// Returns `MandiError::Other` if the HTTP client or the `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, MandiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| MandiError::Other(format!("http client: {e}")))?;
        Self::try_with_reqwest(http)
    }

    /// Build a `YfClient` on top of a caller-provided HTTP client.
    ///
    /// # Errors
    /// Returns `MandiError::Other` if the `YfClient` cannot be built.
    pub fn try_with_reqwest(http: reqwest::Client) -> Result<Self, MandiError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MandiError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> MandiError {
    match e {
        yf::YfError::NotFound { .. } => MandiError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            MandiError::connector("mandi-yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => MandiError::connector(
            "mandi-yfinance",
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            MandiError::connector("mandi-yfinance", format!("status {status}: {context}"))
        }
        other => MandiError::connector("mandi-yfinance", other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, MandiError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfQuotes for RealAdapter {
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, MandiError> {
        yf::quote::quotes(&self.client, symbols.iter().cloned())
            .await
            .map_err(|e| map_yf_err(&e, "quotes"))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, MandiError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, MandiError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, MandiError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfQuotes {
    /// Build a `YfQuotes` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfQuotes>
    where
        F: Send + Sync + 'static + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, MandiError>,
    {
        struct FnQuotes<F>(F);
        #[async_trait]
        impl<F> YfQuotes for FnQuotes<F>
        where
            F: Send + Sync + 'static + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, MandiError>,
        {
            async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, MandiError> {
                (self.0)(symbols.to_vec())
            }
        }
        Arc::new(FnQuotes(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
///
/// Methods default to adapters that answer `Unsupported`, so tests override only
/// what they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(MandiError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfQuotes>`.
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        <dyn YfQuotes>::from_fn(|_| Err(MandiError::unsupported("quote")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        Arc::new(self.clone()) as Arc<dyn YfQuotes>
    }
}
