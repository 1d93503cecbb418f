use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with the provider role traits in `mandi-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Point-in-time price and previous close for a symbol.
    Quote,
    /// Historical close series for a symbol.
    History,
    /// News items for a set of query terms.
    News,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::History => "history",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
