use chrono::NaiveDateTime;
use mandi_core::{
    AlignedSeries, Asset, Currency, Fetched, MandiError, Period, TimeSeries,
    align_and_convert_with, normalize_key,
};

use crate::Mandi;
use crate::core::with_request_deadline;
use crate::dashboard::{ChartSeries, ChartStatus};

impl Mandi {
    /// Historical chart of `asset` over `period`, in INR.
    ///
    /// Behavior and trade-offs:
    /// - USD-quoted assets fetch their own series and USD/INR concurrently, then
    ///   inner-join both on normalised keys (see `mandi_core::align_and_convert_with`)
    ///   at the configured granularity.
    /// - When the FX series is empty or fails the chart keeps the raw asset series
    ///   in USD and says so in `status`, so a missing conversion is never silent.
    /// - `UsdInr` charts its own series, already in INR.
    /// - Never fails; errors and timeouts land in `status`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "mandi::router", skip(self), fields(asset = %asset, period = %period))
    )]
    pub async fn chart(&self, asset: Asset, period: Period) -> ChartSeries {
        if !asset.is_usd_quoted() {
            return self.raw_chart(asset, period).await;
        }

        let fetch_both = async {
            futures::join!(
                self.fetch_history(asset.symbol(), period),
                self.fetch_history(Asset::UsdInr.symbol(), period),
            )
        };
        let (asset_series, fx_series) =
            match with_request_deadline(self.cfg.request_timeout, fetch_both).await {
                Ok(pair) => pair,
                Err(_) => {
                    return ChartSeries::without_points(
                        asset,
                        period,
                        Currency::Inr,
                        ChartStatus::Failed(MandiError::request_timeout("chart")),
                    );
                }
            };

        let series = match asset_series {
            Fetched::Data(s) => s,
            Fetched::Empty => {
                return ChartSeries::without_points(
                    asset,
                    period,
                    Currency::Inr,
                    ChartStatus::NoAssetData,
                );
            }
            Fetched::Failed(e) => {
                return ChartSeries::without_points(
                    asset,
                    period,
                    Currency::Inr,
                    ChartStatus::Failed(e),
                );
            }
        };

        let fx = match fx_series {
            Fetched::Data(fx) => fx,
            Fetched::Empty => return self.usd_chart(asset, period, &series, ChartStatus::NoFxData),
            Fetched::Failed(e) => {
                return self.usd_chart(asset, period, &series, ChartStatus::Failed(e));
            }
        };

        let aligned = align_and_convert_with(&series, &fx, self.cfg.align_granularity);
        let status = if aligned.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "mandi::router",
                asset = %asset,
                asset_points = series.len(),
                fx_points = fx.len(),
                "asset and FX series share no dates"
            );
            ChartStatus::NoOverlap
        } else {
            ChartStatus::Ok
        };
        ChartSeries {
            asset,
            period,
            currency: Currency::Inr,
            points: aligned.values(),
            aligned,
            status,
        }
    }

    async fn raw_chart(&self, asset: Asset, period: Period) -> ChartSeries {
        let currency = asset.quote_currency();
        let fetch = self.fetch_history(asset.symbol(), period);
        let fetched = with_request_deadline(self.cfg.request_timeout, fetch)
            .await
            .unwrap_or_else(|_| Fetched::Failed(MandiError::request_timeout("chart")));
        match fetched {
            Fetched::Data(series) => ChartSeries {
                asset,
                period,
                currency,
                points: self.keyed_points(&series),
                aligned: AlignedSeries::default(),
                status: ChartStatus::Ok,
            },
            Fetched::Empty => {
                ChartSeries::without_points(asset, period, currency, ChartStatus::NoAssetData)
            }
            Fetched::Failed(e) => {
                ChartSeries::without_points(asset, period, currency, ChartStatus::Failed(e))
            }
        }
    }

    fn usd_chart(
        &self,
        asset: Asset,
        period: Period,
        series: &TimeSeries,
        status: ChartStatus,
    ) -> ChartSeries {
        ChartSeries {
            asset,
            period,
            currency: asset.quote_currency(),
            points: self.keyed_points(series),
            aligned: AlignedSeries::default(),
            status,
        }
    }

    /// Valid points keyed the same way an INR chart would be.
    fn keyed_points(&self, series: &TimeSeries) -> Vec<(NaiveDateTime, f64)> {
        let mut out: Vec<(NaiveDateTime, f64)> = Vec::with_capacity(series.len());
        for p in series.iter().filter(|p| !p.is_missing()) {
            let key = normalize_key(&p.ts, self.cfg.align_granularity);
            match out.last_mut() {
                Some(last) if last.0 == key => last.1 = p.value,
                _ => out.push((key, p.value)),
            }
        }
        out
    }
}
