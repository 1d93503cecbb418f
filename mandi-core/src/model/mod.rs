/// Watch-list assets, periods, quotes and price changes.
pub mod market;
/// News items and feed queries.
pub mod news;
/// Timestamps, price series and aligned (converted) series.
pub mod series;
