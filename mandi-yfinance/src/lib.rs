//! mandi-yfinance
//!
//! Connector that implements `MandiConnector` on top of the `yfinance-rs` client
//! library. Exposes daily close history and live quotes for the dashboard's
//! commodity futures and the USD/INR rate.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfHistory, YfQuotes};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use mandi_core::{
    HistoryRequest, Interval, MandiError, Point, PriceQuote, TimeSeries,
    connector::{ConnectorKey, HistoryProvider, MandiConnector, QuoteProvider},
};
use paft::market::requests::history::Interval as YfInterval;
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type QuotesAdapter = Arc<dyn YfQuotes>;
#[cfg(not(feature = "test-adapters"))]
type QuotesAdapter = AdapterArc;

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
    quotes: QuotesAdapter,
}

impl YfConnector {
    /// Static connector key for orchestrator configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("mandi-yfinance");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: MandiError, what: &str) -> MandiError {
        match e {
            MandiError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    MandiError::not_found(what.to_string())
                } else {
                    MandiError::connector("mandi-yfinance", msg)
                }
            }
            MandiError::Other(msg) => MandiError::connector("mandi-yfinance", msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or `YfClient` cannot be constructed.
    pub fn try_new_default() -> Result<Self, MandiError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, MandiError> {
        let a = RealAdapter::try_with_reqwest(http)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            quotes: adapter.clone_arc_quotes(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared),
            quotes: shared,
        }
    }
}

fn yf_history_request(
    req: HistoryRequest,
    now: DateTime<Utc>,
) -> yf::core::services::HistoryRequest {
    let interval = match req.interval {
        Interval::H1 => YfInterval::I1h,
        Interval::D1 => YfInterval::D1,
    };
    yf::core::services::HistoryRequest {
        range: None,
        period: Some((req.period.start(now).timestamp(), now.timestamp())),
        interval,
        include_prepost: false,
        include_actions: false,
        auto_adjust: true,
        keepna: false,
    }
}

/// Offset used to present bar timestamps: the exchange zone when reported, else the
/// fixed UTC offset from the meta block, else UTC.
fn bar_offset(meta: Option<&yf::HistoryMeta>, ts: DateTime<Utc>) -> FixedOffset {
    let Some(meta) = meta else {
        return Utc.fix();
    };
    if let Some(tz) = meta.timezone {
        return ts.with_timezone(&tz).offset().fix();
    }
    meta.utc_offset_seconds
        .and_then(|s| i32::try_from(s).ok())
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Convert a provider response into a close series of aware stamps.
///
/// Candles are ordered by instant; if the provider repeats a timestamp the later
/// candle wins. A close that cannot be represented as `f64` becomes a missing point.
fn series_from_response(
    symbol: &str,
    resp: yf::HistoryResponse,
) -> Result<TimeSeries, MandiError> {
    let meta = resp.meta.as_ref();
    let mut candles = resp.candles;
    candles.sort_by_key(|c| c.ts);

    let mut points: Vec<Point> = Vec::with_capacity(candles.len());
    for c in &candles {
        let ts = c.ts.with_timezone(&bar_offset(meta, c.ts));
        let value = c.close.amount().to_f64().unwrap_or(f64::NAN);
        match points.last_mut() {
            Some(prev) if prev.ts.instant() == ts.naive_utc() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, ts = %ts, "dropping duplicate candle");
                prev.value = value;
            }
            _ => points.push(Point::new(ts, value)),
        }
    }
    TimeSeries::try_new(symbol, points)
}

impl MandiConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl QuoteProvider for YfConnector {
    async fn quote(&self, symbol: &str) -> Result<PriceQuote, MandiError> {
        let what = format!("quote for {symbol}");
        let raw = self
            .quotes
            .fetch(std::slice::from_ref(&symbol.to_string()))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        let first = raw
            .into_iter()
            .next()
            .ok_or_else(|| MandiError::not_found(what.clone()))?;
        let price = first
            .price
            .as_ref()
            .and_then(|m| m.amount().to_f64())
            .ok_or_else(|| MandiError::not_found(what))?;
        let previous_close = first
            .previous_close
            .as_ref()
            .and_then(|m| m.amount().to_f64())
            .unwrap_or(price);
        Ok(PriceQuote::new(price, previous_close))
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(&self, symbol: &str, req: HistoryRequest) -> Result<TimeSeries, MandiError> {
        let yf_req = yf_history_request(req, Utc::now());
        let raw = self
            .history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))?;
        series_from_response(symbol, raw)
    }
}
