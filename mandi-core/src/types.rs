//! Re-export of foundational types from `mandi-types` and the domain model.
// Consolidated re-exports so downstream crates can depend on `mandi-core` only

pub use mandi_types::{
    Capability, ConnectorKey, FetchStrategy, Fetched, Granularity, MandiConfig, MandiError,
};

pub use crate::model::market::{
    Asset, Currency, HistoryRequest, Interval, Period, PriceChange, PriceQuote,
};
pub use crate::model::news::{NewsItem, NewsQuery, Published};
pub use crate::model::series::{AlignedPoint, AlignedSeries, Point, Stamp, TimeSeries};
