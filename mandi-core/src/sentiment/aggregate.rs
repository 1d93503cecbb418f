use core::fmt;

use serde::{Deserialize, Serialize};

use super::analyzer::SentimentScorer;
use crate::model::news::NewsItem;

/// Lowest average score classified as positive (inclusive).
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Highest average score classified as negative (inclusive).
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Categorical reading of an average sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Verdict {
    /// Average at or above [`POSITIVE_THRESHOLD`].
    Positive,
    /// Average at or below [`NEGATIVE_THRESHOLD`].
    Negative,
    /// Anything strictly between the thresholds.
    #[default]
    Neutral,
}

impl Verdict {
    /// Classify a score. Both thresholds are inclusive.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average compound score of a batch and its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Arithmetic mean of the per-item compound scores, in [-1, 1].
    pub average_score: f64,
    /// Classification of `average_score`.
    pub verdict: Verdict,
}

impl AggregateResult {
    /// The answer for an empty batch: `(0.0, Neutral)`.
    pub const NEUTRAL: Self = Self {
        average_score: 0.0,
        verdict: Verdict::Neutral,
    };

    /// Result for a given average.
    #[must_use]
    pub fn from_score(average_score: f64) -> Self {
        Self {
            average_score,
            verdict: Verdict::from_score(average_score),
        }
    }
}

/// Reduce precomputed compound scores to their mean and verdict.
///
/// An empty input yields [`AggregateResult::NEUTRAL`].
pub fn aggregate_scores<I>(scores: I) -> AggregateResult
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return AggregateResult::NEUTRAL;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / count as f64;
    AggregateResult::from_score(mean)
}

/// Score every item's `title + " " + summary` and reduce to one result.
///
/// An empty slice short-circuits to `(0.0, Neutral)` without touching the scorer.
pub fn aggregate_sentiment<S>(scorer: &S, items: &[NewsItem]) -> AggregateResult
where
    S: SentimentScorer + ?Sized,
{
    if items.is_empty() {
        return AggregateResult::NEUTRAL;
    }
    aggregate_scores(items.iter().map(|item| scorer.compound(&item.text())))
}
