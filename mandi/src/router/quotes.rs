use mandi_core::{Asset, Capability, Fetched, MandiError, Period, PriceChange, PriceQuote};

use crate::Mandi;
use crate::dashboard::{AssetSnapshot, MarketOverview, RateSource};
use crate::mandi_router_method;
use crate::router::util::join_with_deadline;

/// Combine the errors of the live quote and of its history fallback.
fn fallback_error(symbol: &str, quote_err: MandiError, history_err: MandiError) -> MandiError {
    match (quote_err, history_err) {
        (MandiError::Unsupported { .. }, h) => h,
        (MandiError::NotFound { .. }, MandiError::NotFound { .. }) => {
            MandiError::not_found(format!("quote for {symbol}"))
        }
        (q, h) => MandiError::AllProvidersFailed(vec![q, h]),
    }
}

impl Mandi {
    mandi_router_method! {
        /// Fetch the live price and previous close for a single symbol.
        ///
        /// Behavior and trade-offs:
        /// - Honors the builder's `FetchStrategy`: `PriorityWithFallback` applies the
        ///   per-provider timeout and aggregates errors; `Latency` races providers and
        ///   returns the first success.
        /// - No history fallback here; see [`Mandi::price_quote`].
        method: quote(symbol: &str) -> PriceQuote,
        accessor: as_quote_provider,
        capability: Capability::Quote,
        call: quote(symbol)
    }

    /// Live quote, or the last two closes of a five-day history window when no
    /// provider returns one.
    ///
    /// With a single close in the window the previous close equals the price.
    ///
    /// # Errors
    /// Returns `NotFound` when neither path yields a price, otherwise the
    /// collected errors of both paths.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "mandi::router", skip(self))
    )]
    pub async fn price_quote(&self, symbol: &str) -> Result<PriceQuote, MandiError> {
        let quote_err = match self.quote(symbol).await {
            Ok(q) => return Ok(q),
            Err(e) => e,
        };
        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "mandi::router",
            symbol,
            error = %quote_err,
            "live quote unavailable; falling back to recent closes"
        );

        match self.history(symbol, Period::D5).await {
            Ok(series) => PriceQuote::from_series_tail(&series)
                .ok_or_else(|| MandiError::not_found(format!("quote for {symbol}"))),
            Err(history_err) => Err(fallback_error(symbol, quote_err, history_err)),
        }
    }

    /// Price and change of one watch-list asset in its quote currency.
    ///
    /// `NotFound` (no price anywhere) is reported as [`Fetched::Empty`]; other
    /// errors as [`Fetched::Failed`].
    pub async fn price_change(&self, asset: Asset) -> Fetched<PriceChange> {
        match self.price_quote(asset.symbol()).await {
            Ok(q) => Fetched::Data(PriceChange::from_quote(q)),
            Err(MandiError::NotFound { .. }) => Fetched::Empty,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "mandi::router", asset = %asset, error = %e, "price fetch failed");
                Fetched::Failed(e)
            }
        }
    }

    /// Live cards for the whole watch-list with INR figures for the commodities.
    ///
    /// Behavior and trade-offs:
    /// - All four quotes are fetched concurrently, bounded by the request timeout.
    /// - The USD/INR card's price is the conversion rate. If it is missing, failed,
    ///   zero or not finite, the configured `fallback_usd_inr` is used and
    ///   `rate_source` is `Fallback`.
    /// - Never fails; a request timeout marks every card `Failed`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "mandi::router", skip(self))
    )]
    pub async fn market_overview(&self) -> MarketOverview {
        let tasks = Asset::ALL.map(|asset| async move { (asset, self.price_change(asset).await) });
        let changes: Vec<(Asset, Fetched<PriceChange>)> =
            match join_with_deadline(tasks, self.cfg.request_timeout).await {
                Ok(v) => v,
                Err(_) => {
                    let e = MandiError::request_timeout("overview");
                    Asset::ALL
                        .iter()
                        .map(|a| (*a, Fetched::Failed(e.clone())))
                        .collect()
                }
            };

        let live_rate = changes
            .iter()
            .find(|(a, _)| *a == Asset::UsdInr)
            .and_then(|(_, f)| f.data())
            .map(|c| c.price)
            .filter(|r| r.is_finite() && *r > 0.0);
        let (usd_inr, rate_source) = match live_rate {
            Some(r) => (r, RateSource::Live),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "mandi::router",
                    fallback = self.cfg.fallback_usd_inr,
                    "USD/INR unavailable; using fallback rate"
                );
                (self.cfg.fallback_usd_inr, RateSource::Fallback)
            }
        };

        let assets = changes
            .into_iter()
            .map(|(asset, fetched)| {
                let snap = fetched.map(|quote| AssetSnapshot {
                    asset,
                    quote,
                    inr: asset.is_usd_quoted().then(|| quote.convert(usd_inr)),
                });
                (asset, snap)
            })
            .collect();

        MarketOverview {
            usd_inr,
            rate_source,
            assets,
        }
    }
}
