use chrono::{NaiveDateTime, Timelike};

use crate::model::series::Stamp;
use mandi_types::Granularity;

/// Reduce a stamp to the key used to join two series.
///
/// The offset is dropped keeping the local wall clock, then the value is truncated
/// to `granularity`. An aware `2024-01-02T00:00-05:00` and a naive
/// `2024-01-02T05:30` therefore share the `Day` key `2024-01-02T00:00`.
#[must_use]
pub fn normalize_key(stamp: &Stamp, granularity: Granularity) -> NaiveDateTime {
    let wall = stamp.wall_clock();
    match granularity {
        Granularity::Hour => wall
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(wall),
        Granularity::Minute => wall
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(wall),
        // `Granularity` is non-exhaustive; anything coarser than an hour joins by date.
        _ => wall.date().and_hms_opt(0, 0, 0).unwrap_or(wall),
    }
}
