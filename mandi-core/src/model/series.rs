use core::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MandiError;

/// Timestamp attached to a price point.
///
/// Providers disagree on representation: some report offset-aware instants, others
/// naive wall-clock values. Two series from different symbols are not guaranteed to
/// use the same form, which is why alignment never compares raw stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stamp {
    /// Instant with a UTC offset (local wall clock is recoverable).
    Aware(DateTime<FixedOffset>),
    /// Wall-clock value without offset information.
    Naive(NaiveDateTime),
}

impl Stamp {
    /// Local wall clock: the aware stamp with its offset stripped, or the naive value.
    #[must_use]
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            Self::Aware(dt) => dt.naive_local(),
            Self::Naive(n) => *n,
        }
    }

    /// Ordering key. Aware stamps compare by UTC instant; naive stamps are read as UTC.
    #[must_use]
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            Self::Aware(dt) => dt.naive_utc(),
            Self::Naive(n) => *n,
        }
    }

    /// Calendar date of the local wall clock.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.wall_clock().date()
    }

    /// True when the stamp carries an offset.
    #[must_use]
    pub const fn is_aware(&self) -> bool {
        matches!(self, Self::Aware(_))
    }
}

impl From<DateTime<FixedOffset>> for Stamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Aware(dt)
    }
}

impl From<DateTime<Utc>> for Stamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Aware(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for Stamp {
    fn from(n: NaiveDateTime) -> Self {
        Self::Naive(n)
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aware(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Naive(n) => write!(f, "{n}"),
        }
    }
}

/// One observation of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Observation time.
    pub ts: Stamp,
    /// Price. NaN or infinite marks a missing observation.
    pub value: f64,
}

impl Point {
    /// Construct a point from anything convertible into a [`Stamp`].
    pub fn new(ts: impl Into<Stamp>, value: f64) -> Self {
        Self {
            ts: ts.into(),
            value,
        }
    }

    /// True when the value is NaN or infinite.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        !self.value.is_finite()
    }
}

/// Price series for one symbol, strictly increasing by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    symbol: String,
    points: Vec<Point>,
}

impl TimeSeries {
    /// Build a series after checking that timestamps are strictly increasing.
    ///
    /// # Errors
    /// Returns `MandiError::Data` if two consecutive points are out of order or share
    /// the same instant.
    pub fn try_new(symbol: impl Into<String>, points: Vec<Point>) -> Result<Self, MandiError> {
        let symbol = symbol.into();
        if let Some(w) = points
            .windows(2)
            .find(|w| w[0].ts.instant() >= w[1].ts.instant())
        {
            return Err(MandiError::Data(format!(
                "series for {symbol} is not strictly increasing at {} -> {}",
                w[0].ts, w[1].ts
            )));
        }
        Ok(Self { symbol, points })
    }

    /// The valid empty series for `symbol`.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            points: vec![],
        }
    }

    /// Symbol this series was fetched for.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Points in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, missing ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// The last `n` non-missing values, oldest first.
    #[must_use]
    pub fn tail_values(&self, n: usize) -> Vec<f64> {
        let mut out: Vec<f64> = self
            .points
            .iter()
            .rev()
            .filter(|p| !p.is_missing())
            .take(n)
            .map(|p| p.value)
            .collect();
        out.reverse();
        out
    }
}

/// One row of an aligned series: the join key, both source values, and their product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Normalised join key (local wall clock truncated to the alignment granularity).
    pub ts: NaiveDateTime,
    /// Asset price in its quote currency.
    pub asset: f64,
    /// FX rate at the same key.
    pub fx: f64,
    /// `asset * fx`.
    pub value: f64,
}

impl AlignedPoint {
    /// Calendar date of the join key.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.ts.date()
    }
}

/// Asset series converted through an FX series on shared keys.
///
/// May be empty: that is the expected answer for disjoint or missing inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    points: Vec<AlignedPoint>,
}

impl AlignedSeries {
    pub(crate) const fn from_points(points: Vec<AlignedPoint>) -> Self {
        Self { points }
    }

    /// Rows in key order.
    #[must_use]
    pub fn points(&self) -> &[AlignedPoint] {
        &self.points
    }

    /// Number of matched rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no key matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = &AlignedPoint> {
        self.points.iter()
    }

    /// `(key, converted value)` pairs, the shape a line chart consumes.
    #[must_use]
    pub fn values(&self) -> Vec<(NaiveDateTime, f64)> {
        self.points.iter().map(|p| (p.ts, p.value)).collect()
    }
}
