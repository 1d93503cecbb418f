//! Fetch outcome envelope returned by the orchestrator's non-failing operations.

use serde::{Deserialize, Serialize};

use crate::error::MandiError;

/// Result of a provider fetch that never fails the caller.
///
/// Distinguishes a legitimate "no data" answer from a failed fetch while keeping
/// both recoverable: presentation code renders defaults for either, but logs and
/// status lines can tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fetched<T> {
    /// The provider returned usable data.
    Data(T),
    /// The provider answered, but with nothing to show.
    Empty,
    /// Every eligible provider failed.
    Failed(MandiError),
}

impl<T> Fetched<T> {
    /// True when the fetch produced data.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// True when the fetch failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data(v) => Some(v),
            Self::Empty | Self::Failed(_) => None,
        }
    }

    /// Take the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(v) => Some(v),
            Self::Empty | Self::Failed(_) => None,
        }
    }

    /// Borrow the failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&MandiError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Data(_) | Self::Empty => None,
        }
    }

    /// Map the payload, preserving `Empty` and `Failed`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Self::Data(v) => Fetched::Data(f(v)),
            Self::Empty => Fetched::Empty,
            Self::Failed(e) => Fetched::Failed(e),
        }
    }
}

impl<T: Default> Fetched<T> {
    /// Take the payload or the type's default when there is none.
    pub fn data_or_default(self) -> T {
        self.into_data().unwrap_or_default()
    }
}

impl<T> From<Result<T, MandiError>> for Fetched<T> {
    fn from(res: Result<T, MandiError>) -> Self {
        match res {
            Ok(v) => Self::Data(v),
            Err(e) => Self::Failed(e),
        }
    }
}
