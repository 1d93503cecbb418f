use std::collections::HashMap;

use crate::MandiError;

// Curated subset of the VADER lexicon plus market and geopolitics terms VADER
// does not rate (e.g. "surge", "sanctions", "escalate").
static EMBEDDED: &str = include_str!("../../data/lexicon.tsv");

/// Word → mean valence table used by [`crate::SentimentAnalyzer`].
///
/// Lines are tab separated: `token<TAB>mean valence[<TAB>anything else]`. Blank
/// lines are ignored, as are lines starting with `#` that do not carry a numeric
/// valence; rated tokens such as the emoticon `#-|` are kept. Tokens are stored
/// lower-cased.
///
/// The [embedded](Self::embedded) table is a few hundred tokens tuned for
/// commodity and geopolitics headlines, not the full VADER lexicon, so scores
/// differ from a stock VADER analyzer. Load the full table with [`Self::parse`]
/// and pass it to the orchestrator builder when parity matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    words: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse the lexicon compiled into this crate.
    ///
    /// # Errors
    /// Returns `MandiError::Data` if the embedded table is malformed.
    pub fn embedded() -> Result<Self, MandiError> {
        Self::parse(EMBEDDED)
    }

    /// Parse a lexicon from text.
    ///
    /// # Errors
    /// Returns `MandiError::Data` naming the first malformed line (missing
    /// valence column or a valence that is not a finite number).
    pub fn parse(text: &str) -> Result<Self, MandiError> {
        let mut words = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let mut cols = line.split('\t');
            let token = cols.next().map(str::trim).unwrap_or_default();
            let valence = cols
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite());
            match (token.is_empty(), valence) {
                (false, Some(v)) => {
                    words.insert(token.to_lowercase(), v);
                }
                // Comment: a `#` line without a valence.
                (_, None) if line.starts_with('#') => {}
                _ => {
                    return Err(MandiError::Data(format!(
                        "malformed lexicon line {}: '{line}'",
                        idx + 1
                    )));
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(words = words.len(), "parsed sentiment lexicon");
        Ok(Self { words })
    }

    /// Build a lexicon from `(token, valence)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            words: pairs
                .into_iter()
                .map(|(w, v)| (w.as_ref().to_lowercase(), v))
                .collect(),
        }
    }

    /// Valence of a lower-cased token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<f64> {
        self.words.get(token).copied()
    }

    /// True if the lower-cased token is rated.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    /// Number of rated tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when nothing is rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
