//! mandi-core
//!
//! Core types, traits, and pure transformations shared across the mandi workspace.
//!
//! - `types`: price series, quotes, news items and the shared error/config types.
//! - `connector`: the `MandiConnector` trait and capability provider traits.
//! - `timeseries`: key normalisation and the asset × FX series aligner.
//! - `sentiment`: lexicon loading, rule-based polarity scoring and aggregation.
//!
//! Everything in `timeseries` and `sentiment` is synchronous and side-effect free;
//! connectors and the orchestrator own all I/O.
#![warn(missing_docs)]

/// Connector capability traits and the primary `MandiConnector` interface.
pub mod connector;
/// Domain model: series, quotes, assets, periods and news.
pub mod model;
/// Rule-based news sentiment scoring and aggregation.
pub mod sentiment;
/// Time-series key normalisation and alignment.
pub mod timeseries;
pub mod types;

pub use connector::MandiConnector;
pub use sentiment::{
    AggregateResult, Lexicon, PolarityScores, SentimentAnalyzer, SentimentScorer, Verdict,
    aggregate_scores, aggregate_sentiment,
};
pub use timeseries::align::{align_and_convert, align_and_convert_with};
pub use timeseries::normalize::normalize_key;
pub use types::*;
