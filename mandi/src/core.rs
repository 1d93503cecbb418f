#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use mandi_core::{
    Capability, FetchStrategy, Granularity, Lexicon, MandiConfig, MandiConnector, MandiError,
    SentimentAnalyzer,
};

use crate::router::util::collapse_errors;

/// Orchestrator that routes dashboard requests across registered providers.
pub struct Mandi {
    pub(crate) connectors: Vec<Arc<dyn MandiConnector>>,
    pub(crate) cfg: MandiConfig,
    pub(crate) analyzer: SentimentAnalyzer,
}

/// Builder for constructing a `Mandi` orchestrator with custom configuration.
pub struct MandiBuilder {
    connectors: Vec<Arc<dyn MandiConnector>>,
    cfg: MandiConfig,
    lexicon: Option<Arc<Lexicon>>,
}

impl Default for MandiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MandiBuilder {
    /// Create a new builder with the defaults of [`MandiConfig`].
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: MandiConfig::default(),
            lexicon: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is routing order. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MandiConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub fn config(mut self, cfg: MandiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// Behavior and trade-offs:
    /// - `PriorityWithFallback`: deterministic order, applies per-provider timeout,
    ///   aggregates errors; may be slower but predictable and economical on rate limits.
    /// - `Latency`: race all eligible providers and return the first success; fastest
    ///   typical latency but consumes more concurrent requests.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for fan-out operations (overview, charts).
    ///
    /// When exceeded the operation reports a `RequestTimeout` failure.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// USD/INR rate used when the live rate is unavailable or zero.
    #[must_use]
    pub const fn fallback_usd_inr(mut self, rate: f64) -> Self {
        self.cfg.fallback_usd_inr = rate;
        self
    }

    /// Join-key resolution for INR charts.
    #[must_use]
    pub const fn align_granularity(mut self, granularity: Granularity) -> Self {
        self.cfg.align_granularity = granularity;
        self
    }

    /// Maximum number of headlines kept for the geopolitical pulse.
    #[must_use]
    pub const fn news_limit(mut self, limit: usize) -> Self {
        self.cfg.news_limit = limit;
        self
    }

    /// Score news with a caller-provided lexicon instead of the embedded one.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Build the `Mandi` orchestrator.
    ///
    /// The sentiment lexicon is parsed here, once, and shared by every later call.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered or the fallback
    /// rate is not a positive finite number, and `Data` if the embedded lexicon
    /// cannot be parsed.
    pub fn build(self) -> Result<Mandi, MandiError> {
        if self.connectors.is_empty() {
            return Err(MandiError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let rate = self.cfg.fallback_usd_inr;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(MandiError::InvalidArg(format!(
                "fallback_usd_inr must be a positive number, got {rate}"
            )));
        }

        let analyzer = match self.lexicon {
            Some(lexicon) => SentimentAnalyzer::new(lexicon),
            None => SentimentAnalyzer::embedded()?,
        };

        Ok(Mandi {
            connectors: self.connectors,
            cfg: self.cfg,
            analyzer,
        })
    }
}

pub(crate) fn tag_err(connector: &str, e: MandiError) -> MandiError {
    match e {
        e @ (MandiError::NotFound { .. }
        | MandiError::ProviderTimeout { .. }
        | MandiError::Connector { .. }
        | MandiError::RequestTimeout { .. }
        | MandiError::AllProvidersTimedOut { .. }
        | MandiError::AllProvidersFailed(_)) => e,
        other => MandiError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Run `fut` under an optional overall deadline.
///
/// On timeout returns `RequestTimeout("request")`; call sites remap the label.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, MandiError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| MandiError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Mandi {
    /// Start building a new `Mandi` instance.
    #[must_use]
    pub fn builder() -> MandiBuilder {
        MandiBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &MandiConfig {
        &self.cfg
    }

    /// The shared sentiment analyzer.
    #[must_use]
    pub const fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mandi::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, MandiError>
    where
        Fut: core::future::Future<Output = Result<T, MandiError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(MandiError::provider_timeout(connector_name, capability)))
    }

    /// Generic single-item fetch helper.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies per-provider timeout in both modes
    /// - Collapses errors: no capable provider → `Unsupported`, every attempt
    ///   timed out → `AllProvidersTimedOut`, every attempt not found →
    ///   `NotFound("{capability} for {target}")`, else `AllProvidersFailed`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mandi::core::fetch_single",
            skip(self, call),
            fields(target = %target, capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        target: &str,
        capability: Capability,
        call: F,
    ) -> Result<T, MandiError>
    where
        T: Send,
        F: Fn(Arc<dyn MandiConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, MandiError>> + Send,
    {
        if target.trim().is_empty() {
            return Err(MandiError::InvalidArg(format!(
                "empty target for {capability} request"
            )));
        }
        match self.cfg.fetch_strategy {
            FetchStrategy::Latency => self.fetch_single_latency(target, capability, call).await,
            _ => {
                self.fetch_single_priority_with_fallback(target, capability, call)
                    .await
            }
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        target: &str,
        capability: Capability,
        call: F,
    ) -> Result<T, MandiError>
    where
        T: Send,
        F: Fn(Arc<dyn MandiConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, MandiError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<MandiError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c)) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability.as_str(),
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (MandiError::NotFound { .. } | MandiError::ProviderTimeout { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{capability} for {target}")),
        ))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        target: &str,
        capability: Capability,
        call: F,
    ) -> Result<T, MandiError>
    where
        T: Send,
        F: Fn(Arc<dyn MandiConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, MandiError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        for c in &self.connectors {
            if let Some(fut) = call(Arc::clone(c)) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability.as_str(), timeout, fut)
                            .await,
                    )
                });
            }
        }
        let attempted_any = !futs.is_empty();

        let mut errors: Vec<MandiError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(e @ (MandiError::ProviderTimeout { .. } | MandiError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{capability} for {target}")),
        ))
    }
}
