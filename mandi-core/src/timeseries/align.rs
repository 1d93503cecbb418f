use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::model::series::{AlignedPoint, AlignedSeries, TimeSeries};
use crate::timeseries::normalize::normalize_key;
use mandi_types::Granularity;

/// Convert `asset` through `fx` on shared calendar dates.
///
/// Shorthand for [`align_and_convert_with`] at [`Granularity::Day`].
#[must_use]
pub fn align_and_convert(asset: &TimeSeries, fx: &TimeSeries) -> AlignedSeries {
    align_and_convert_with(asset, fx, Granularity::Day)
}

/// Inner-join two series on normalised keys and multiply matched values.
///
/// - Every stamp is normalised with [`normalize_key`] before comparison, so aware
///   and naive series or bars sampled at different times of day still match.
/// - Only keys present in both series survive.
/// - Missing values (NaN or infinite) are skipped on either side, as are products
///   that overflow to a non-finite value.
/// - When several points of one series collapse onto the same key the latest wins.
///
/// Empty inputs and disjoint periods yield an empty series; neither is an error.
#[must_use]
pub fn align_and_convert_with(
    asset: &TimeSeries,
    fx: &TimeSeries,
    granularity: Granularity,
) -> AlignedSeries {
    if asset.is_empty() || fx.is_empty() {
        return AlignedSeries::default();
    }

    let asset_by_key = keyed(asset, granularity);
    let fx_by_key = keyed(fx, granularity);

    let points = asset_by_key
        .into_iter()
        .filter_map(|(ts, a)| {
            let rate = *fx_by_key.get(&ts)?;
            let value = a * rate;
            value.is_finite().then_some(AlignedPoint {
                ts,
                asset: a,
                fx: rate,
                value,
            })
        })
        .collect();

    AlignedSeries::from_points(points)
}

fn keyed(series: &TimeSeries, granularity: Granularity) -> BTreeMap<NaiveDateTime, f64> {
    let mut map = BTreeMap::new();
    for p in series.iter().filter(|p| !p.is_missing()) {
        map.insert(normalize_key(&p.ts, granularity), p.value);
    }
    map
}
