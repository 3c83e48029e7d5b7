//! Inclusive bounds a partition must cover.

use super::{GroupDomainError, GroupRange};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The inclusive integer range `lower..=upper` that a valid group sequence
/// must cover exactly.
///
/// # Examples
///
/// ```
/// use groupstatus::partition::domain::PartitionBounds;
///
/// let bounds = PartitionBounds::default();
/// assert_eq!((bounds.lower(), bounds.upper()), (1, 10));
/// assert_eq!(bounds.span(), 10);
/// assert_eq!(bounds.to_string(), "1-10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionBounds {
    lower: i64,
    upper: i64,
}

impl PartitionBounds {
    /// Default lower bound.
    pub const DEFAULT_LOWER: i64 = 1;
    /// Default upper bound.
    pub const DEFAULT_UPPER: i64 = 10;

    /// Creates validated bounds.
    ///
    /// Item ids are looked up remotely and must be positive, and since a
    /// group needs `from < to` the bounds must span at least two items.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::InvalidBounds`] when `lower < 1` or
    /// `lower >= upper`.
    pub const fn new(lower: i64, upper: i64) -> Result<Self, GroupDomainError> {
        if lower < 1 || lower >= upper {
            return Err(GroupDomainError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn lower(self) -> i64 {
        self.lower
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn upper(self) -> i64 {
        self.upper
    }

    /// Number of integers a valid partition covers.
    #[must_use]
    pub fn span(self) -> u64 {
        GroupRange::bounded(self.lower, self.upper).covered_count()
    }

    /// Returns a group covering the whole bounds.
    #[must_use]
    pub const fn full_range(self) -> GroupRange {
        GroupRange::bounded(self.lower, self.upper)
    }
}

impl Default for PartitionBounds {
    fn default() -> Self {
        Self {
            lower: Self::DEFAULT_LOWER,
            upper: Self::DEFAULT_UPPER,
        }
    }
}

impl fmt::Display for PartitionBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}
