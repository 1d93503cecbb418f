//! Mandi orchestrates the dashboard's data requests across registered providers.
//!
//! Overview
//! - Routes quote, history and news requests to connectors implementing the
//!   `mandi_core` contracts, in registration order.
//! - Applies a per-provider timeout and an optional request-level deadline.
//! - Converts USD-quoted commodities to INR, both for the live overview and for
//!   historical charts (through `mandi_core::align_and_convert`).
//! - Scores news headlines with a lexicon loaded once at build time.
//!
//! Dashboard operations never fail the caller: they return [`Fetched`] values or
//! status enums so a page can render defaults while still telling "no data"
//! apart from "fetch failed".
//!
//! Key behaviors and trade-offs
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, per-provider timeout, aggregates
//!     errors; fewer concurrent requests but potentially higher latency.
//!   - `Latency`: races eligible providers; lowest tail latency but higher request fanout.
//! - Quote fallback: when no provider returns a live quote, the last two closes of a
//!   five-day history window stand in for price and previous close.
//! - FX fallback: when the live USD/INR rate is unavailable or zero the configured
//!   `fallback_usd_inr` is used and the overview says so.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use mandi::{Asset, Mandi, Period};
//!
//! let mandi = Mandi::builder()
//!     .with_connector(Arc::new(mandi_yfinance::YfConnector::try_new_default()?))
//!     .with_connector(Arc::new(mandi_gnews::GoogleNewsConnector::try_new_default()?))
//!     .build()?;
//!
//! let overview = mandi.market_overview().await;
//! let chart = mandi.chart(Asset::Gold, Period::M1).await;
//! let pulse = mandi.geopolitical_pulse().await;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod dashboard;
mod router;

pub use crate::core::{Mandi, MandiBuilder};
pub use dashboard::{AssetSnapshot, ChartSeries, ChartStatus, MarketOverview, RateSource, SentimentPulse};
pub use router::util::{collapse_errors, join_with_deadline};

// Re-export core types for convenience
pub use mandi_core::{
    AggregateResult, AlignedPoint, AlignedSeries, Asset, Capability, Currency, FetchStrategy,
    Fetched, Granularity, HistoryRequest, Interval, Lexicon, MandiConfig, MandiConnector,
    MandiError, NewsItem, NewsQuery, Period, Point, PriceChange, PriceQuote, Published,
    SentimentAnalyzer, Stamp, TimeSeries, Verdict,
};
