//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Use registration order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Resolution of the join key used when aligning two price series.
///
/// Timestamps are reduced to their local wall clock and then truncated to this
/// unit before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Granularity {
    /// Calendar date (daily bars).
    #[default]
    Day,
    /// Start of the hour.
    Hour,
    /// Start of the minute.
    Minute,
}

/// Global configuration for the `Mandi` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MandiConfig {
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for fan-out operations (overview, charts).
    pub request_timeout: Option<Duration>,
    /// USD/INR rate used when the live rate is unavailable or zero.
    pub fallback_usd_inr: f64,
    /// Join-key resolution for INR chart alignment.
    pub align_granularity: Granularity,
    /// Maximum number of news items kept per query.
    pub news_limit: usize,
}

impl Default for MandiConfig {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            fallback_usd_inr: 80.0,
            align_granularity: Granularity::Day,
            news_limit: 20,
        }
    }
}
