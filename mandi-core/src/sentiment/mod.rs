//! Lexicon/rule-based news sentiment.
//!
//! The lexicon is parsed once and shared by handle; scoring and aggregation are
//! pure functions of their inputs.
/// Mean-score reduction and verdict thresholds.
pub mod aggregate;
/// Polarity scoring over a lexicon.
pub mod analyzer;
/// Word → valence table.
pub mod lexicon;
mod rules;

pub use aggregate::{
    AggregateResult, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, Verdict, aggregate_scores,
    aggregate_sentiment,
};
pub use analyzer::{PolarityScores, SentimentAnalyzer, SentimentScorer};
pub use lexicon::Lexicon;
