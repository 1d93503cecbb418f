use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use mandi_core::connector::{HistoryProvider, MandiConnector, NewsProvider, QuoteProvider};
use mandi_core::{
    Capability, HistoryRequest, MandiError, NewsItem, NewsQuery, PriceQuote, TimeSeries,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(MandiError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    quote_rules: HashMap<String, MockBehavior<PriceQuote>>,
    history_rules: HashMap<String, MockBehavior<TimeSeries>>,
    news_rule: Option<MockBehavior<Vec<NewsItem>>>,
    calls: Vec<(Capability, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `quote` calls for a specific symbol.
    pub async fn set_quote_behavior(&self, symbol: &str, behavior: MockBehavior<PriceQuote>) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(&self, symbol: &str, behavior: MockBehavior<TimeSeries>) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for every `news` call.
    pub async fn set_news_behavior(&self, behavior: MockBehavior<Vec<NewsItem>>) {
        let mut guard = self.state.lock().await;
        guard.news_rule = Some(behavior);
    }

    /// Calls received so far, in order, as `(capability, symbol or query)`.
    pub async fn calls(&self) -> Vec<(Capability, String)> {
        let guard = self.state.lock().await;
        guard.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.clear();
        guard.history_rules.clear();
        guard.news_rule = None;
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Calls without a configured behavior fail with `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn MandiConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn MandiConnector>, controller)
    }

    // Records the call and snapshots the rule without holding the lock across awaits.
    async fn record<T: Clone>(
        &self,
        capability: Capability,
        key: &str,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Option<MockBehavior<T>> {
        let mut guard = self.state.lock().await;
        guard.calls.push((capability, key.to_string()));
        pick(&*guard)
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, capability: Capability) -> Result<T, MandiError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(MandiError::unsupported(capability.as_str())),
    }
}

impl MandiConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl QuoteProvider for DynamicMockConnector {
    async fn quote(&self, symbol: &str) -> Result<PriceQuote, MandiError> {
        let behavior = self
            .record(Capability::Quote, symbol, |s| s.quote_rules.get(symbol).cloned())
            .await;
        play(behavior, Capability::Quote).await
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(&self, symbol: &str, _req: HistoryRequest) -> Result<TimeSeries, MandiError> {
        let behavior = self
            .record(Capability::History, symbol, |s| {
                s.history_rules.get(symbol).cloned()
            })
            .await;
        play(behavior, Capability::History).await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MandiError> {
        let behavior = self
            .record(Capability::News, &query.to_query_string(), |s| {
                s.news_rule.clone()
            })
            .await;
        play(behavior, Capability::News).await
    }
}
