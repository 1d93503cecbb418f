//! Presentation-ready results of the dashboard operations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use mandi_core::{
    AggregateResult, AlignedSeries, Asset, Currency, Fetched, MandiError, NewsItem, Period,
    PriceChange,
};

/// Where the USD/INR rate used for conversion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// Live quote (or its history fallback).
    Live,
    /// The configured `fallback_usd_inr`.
    Fallback,
}

/// Price card for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    /// The asset.
    pub asset: Asset,
    /// Price and change in the asset's quote currency.
    pub quote: PriceChange,
    /// Price and change converted to INR; `None` for `UsdInr` itself.
    pub inr: Option<PriceChange>,
}

impl AssetSnapshot {
    /// INR price, if converted.
    #[must_use]
    pub fn price_inr(&self) -> Option<f64> {
        self.inr.map(|c| c.price)
    }

    /// INR absolute change, if converted.
    #[must_use]
    pub fn change_inr(&self) -> Option<f64> {
        self.inr.map(|c| c.change_abs)
    }
}

/// Live prices of the whole watch-list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    /// USD/INR rate applied to the commodity cards.
    pub usd_inr: f64,
    /// Whether `usd_inr` is live or the configured fallback.
    pub rate_source: RateSource,
    /// One entry per asset in [`Asset::ALL`] order.
    pub assets: Vec<(Asset, Fetched<AssetSnapshot>)>,
}

impl MarketOverview {
    /// The entry for `asset`.
    #[must_use]
    pub fn get(&self, asset: Asset) -> Option<&Fetched<AssetSnapshot>> {
        self.assets.iter().find(|(a, _)| *a == asset).map(|(_, f)| f)
    }

    /// True when conversion used the configured fallback rate.
    #[must_use]
    pub fn used_fallback_rate(&self) -> bool {
        self.rate_source == RateSource::Fallback
    }
}

/// Why a chart has the points it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartStatus {
    /// Points are present in the chart's currency.
    Ok,
    /// The asset series came back empty.
    NoAssetData,
    /// The FX series came back empty; points are the unconverted asset series.
    NoFxData,
    /// Both series had data but no shared dates.
    NoOverlap,
    /// A fetch failed. If only the FX fetch failed, points are the unconverted
    /// asset series.
    Failed(MandiError),
}

/// A price chart ready to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Charted asset.
    pub asset: Asset,
    /// Requested look-back window.
    pub period: Period,
    /// Currency of `points`.
    pub currency: Currency,
    /// `(normalised timestamp, value)` in ascending order.
    pub points: Vec<(NaiveDateTime, f64)>,
    /// Aligned asset and FX values behind an INR chart; empty otherwise.
    pub aligned: AlignedSeries,
    /// Outcome of the fetch and alignment.
    pub status: ChartStatus,
}

impl ChartSeries {
    pub(crate) fn without_points(
        asset: Asset,
        period: Period,
        currency: Currency,
        status: ChartStatus,
    ) -> Self {
        Self {
            asset,
            period,
            currency,
            points: Vec::new(),
            aligned: AlignedSeries::default(),
            status,
        }
    }

    /// True when the chart has something to draw.
    #[must_use]
    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }
}

/// Headlines and their aggregate sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPulse {
    /// The headlines that were scored.
    pub news: Fetched<Vec<NewsItem>>,
    /// Average compound score and verdict; `(0.0, Neutral)` without headlines.
    pub result: AggregateResult,
}
