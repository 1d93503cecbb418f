use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;
use super::rules::{
    C_INCR, LOOKBACK, N_SCALAR, booster, is_all_caps, is_negation, normalize,
    punctuation_emphasis, round_to,
};
use crate::MandiError;

/// Polarity breakdown of one text.
///
/// `neg`, `neu` and `pos` are proportions that sum to roughly one (rounded to three
/// decimals); `compound` is the normalised overall score in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Share of negative sentiment.
    pub neg: f64,
    /// Share of neutral words.
    pub neu: f64,
    /// Share of positive sentiment.
    pub pos: f64,
    /// Normalised overall score.
    pub compound: f64,
}

/// Anything that turns text into a compound score in [-1, 1].
///
/// The aggregator is generic over this so tests and alternative models can plug in.
pub trait SentimentScorer: Send + Sync {
    /// Compound score of `text`.
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon and rule based polarity scorer.
///
/// Cheap to clone: the lexicon is shared behind an `Arc` and never re-read.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl SentimentAnalyzer {
    /// Scorer over a shared lexicon.
    #[must_use]
    pub const fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Scorer over the lexicon compiled into this crate.
    ///
    /// # Errors
    /// Returns `MandiError::Data` if the embedded lexicon cannot be parsed.
    pub fn embedded() -> Result<Self, MandiError> {
        Ok(Self::new(Arc::new(Lexicon::embedded()?)))
    }

    /// The lexicon in use.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`.
    ///
    /// Text without any token longer than one character scores all zeros.
    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words = tokenize(text);
        if words.is_empty() {
            return PolarityScores::default();
        }
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = allcap_differential(&words);

        let mut sentiments: Vec<f64> = Vec::with_capacity(words.len());
        for (i, lw) in lower.iter().enumerate() {
            let is_kind_of = lw == "kind" && lower.get(i + 1).is_some_and(|n| n == "of");
            if booster(lw).is_some() || is_kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence(&words, &lower, i, cap_diff));
        }

        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn valence(&self, words: &[&str], lower: &[String], i: usize, cap_diff: bool) -> f64 {
        let Some(mut valence) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };

        if cap_diff && is_all_caps(words[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start in 0..LOOKBACK {
            if i <= start {
                break;
            }
            let prev = i - (start + 1);
            if self.lexicon.contains(&lower[prev]) {
                continue;
            }
            let mut s = scalar_inc_dec(words[prev], &lower[prev], valence, cap_diff);
            match start {
                1 => s *= 0.95,
                2 => s *= 0.9,
                _ => {}
            }
            valence += s;
            valence = negation_check(valence, lower, start, i);
        }

        least_check(valence, lower, i, &self.lexicon)
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}

/// Whitespace tokens with surrounding punctuation removed.
///
/// Tokens that shrink to two characters or fewer keep their punctuation (so
/// emoticon-like tokens survive); single-character tokens are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|tok| {
            let stripped = tok.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                tok
            } else {
                stripped
            }
        })
        .filter(|w| w.chars().count() > 1)
        .collect()
}

/// True when some but not all words are ALL-CAPS.
fn allcap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

fn scalar_inc_dec(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start: usize, i: usize) -> f64 {
    let back = |n: usize| lower[i - n].as_str();
    let so_this = |w: &str| w == "so" || w == "this";
    match start {
        0 if is_negation(back(1)) => valence * N_SCALAR,
        1 if back(2) == "never" && so_this(back(1)) => valence * 1.25,
        1 if back(2) == "without" && back(1) == "doubt" => valence,
        1 if is_negation(back(2)) => valence * N_SCALAR,
        2 if back(3) == "never" && (so_this(back(2)) || so_this(back(1))) => valence * 1.25,
        2 if back(3) == "without" && (back(2) == "doubt" || back(1) == "doubt") => valence,
        2 if is_negation(back(3)) => valence * N_SCALAR,
        _ => valence,
    }
}

/// "at least" is neutral; a bare "least" before a word negates it.
fn least_check(valence: f64, lower: &[String], i: usize, lexicon: &Lexicon) -> f64 {
    if i == 0 || lower[i - 1] != "least" || lexicon.contains(&lower[i - 1]) {
        return valence;
    }
    if i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very") {
        valence
    } else {
        valence * N_SCALAR
    }
}

/// Shift emphasis after a contrastive "but".
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        if idx < bi {
            *s *= 0.5;
        } else if idx > bi {
            *s *= 1.5;
        }
    }
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return PolarityScores::default();
    }
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
