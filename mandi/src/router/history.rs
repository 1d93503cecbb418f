use mandi_core::{Capability, Fetched, HistoryRequest, MandiError, Period, TimeSeries};

use crate::Mandi;
use crate::mandi_router_method;

impl Mandi {
    mandi_router_method! {
        /// Fetch a close series with an explicit request.
        ///
        /// The first provider that answers wins, even with an empty series: an
        /// empty window is an answer, not a failure.
        method: history_with(symbol: &str, req: HistoryRequest) -> TimeSeries,
        accessor: as_history_provider,
        capability: Capability::History,
        call: history(symbol, req)
    }

    /// Fetch daily closes for `symbol` over `period`.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support history.
    pub async fn history(&self, symbol: &str, period: Period) -> Result<TimeSeries, MandiError> {
        self.history_with(symbol, HistoryRequest::daily(period)).await
    }

    /// Fetch daily closes without failing the caller.
    ///
    /// An empty series becomes [`Fetched::Empty`]; any error becomes
    /// [`Fetched::Failed`] and is logged.
    pub async fn fetch_history(&self, symbol: &str, period: Period) -> Fetched<TimeSeries> {
        match self.history(symbol, period).await {
            Ok(series) if series.is_empty() => Fetched::Empty,
            Ok(series) => Fetched::Data(series),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "mandi::router",
                    symbol,
                    period = %period,
                    error = %e,
                    "history fetch failed"
                );
                Fetched::Failed(e)
            }
        }
    }
}
