use core::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Publication time of a news item, or the sentinel for feeds that omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Published {
    /// Timestamp reported by the feed.
    At(DateTime<FixedOffset>),
    /// The feed did not carry a usable date.
    #[default]
    Unknown,
}

impl Published {
    /// The timestamp, if known.
    #[must_use]
    pub const fn at(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::At(dt) => Some(*dt),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Published {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(dt) => write!(f, "{}", dt.to_rfc2822()),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// A headline from a news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub title: String,
    /// Article URL.
    pub link: String,
    /// Publication time.
    pub published: Published,
    /// Feed description; may be empty or contain HTML markup.
    pub summary: String,
}

impl NewsItem {
    /// Text scored for sentiment: title and summary joined by a space.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }

    /// Summary up to the first markup tag, trimmed and cut to `max_chars` characters.
    #[must_use]
    pub fn summary_snippet(&self, max_chars: usize) -> String {
        let head = self.summary.split('<').next().unwrap_or_default().trim();
        head.chars().take(max_chars).collect()
    }
}

/// Search terms for a news provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsQuery {
    /// Phrases OR-ed together.
    pub terms: Vec<String>,
    /// Maximum number of items to keep.
    pub limit: usize,
}

/// Topics watched by the geopolitical sentiment gauge.
pub const GEOPOLITICS_TERMS: [&str; 9] = [
    "Geopolitics",
    "Trade War",
    "Crude Oil Prices",
    "Gold Prices",
    "USD INR Exchange Rate",
    "Middle East Conflict",
    "US Federal Reserve",
    "OPEC",
    "Russia Ukraine",
];

impl NewsQuery {
    /// Query over `terms` keeping at most `limit` items.
    pub fn new<I, S>(terms: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            limit,
        }
    }

    /// The dashboard's default query: [`GEOPOLITICS_TERMS`], top 20.
    #[must_use]
    pub fn geopolitics() -> Self {
        Self::new(GEOPOLITICS_TERMS, 20)
    }

    /// Replace the item limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Search expression: every term double-quoted, joined by `" OR "`.
    ///
    /// Not URL-encoded; connectors encode it for their transport.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.terms
            .iter()
            .map(|t| format!("\"{}\"", t.trim()))
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self::geopolitics()
    }
}
