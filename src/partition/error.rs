//! Validation error types for group partitions.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. The rendered messages are meant to be
//! shown to the user verbatim.

use super::domain::PartitionBounds;
use thiserror::Error;

/// Result type for partition validation.
pub type PartitionResult<T> = Result<T, PartitionError>;

/// Reasons a group sequence is not a valid partition.
///
/// `group` fields hold the 1-based position of the offending group in the
/// sequence as the user entered it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// A group has an empty `from` or `to`.
    #[error("Please fill in all group ranges.")]
    IncompleteRange {
        /// Position of the incomplete group.
        group: usize,
    },

    /// A group's `from` is not strictly less than its `to`.
    #[error("Invalid range: 'From' must be less than 'To'.")]
    InvalidRangeOrder {
        /// Position of the offending group.
        group: usize,
        /// The group's lower end.
        from: i64,
        /// The group's upper end.
        to: i64,
    },

    /// A group reaches outside the partition bounds.
    #[error("Group range must be within {bounds}.")]
    OutOfBounds {
        /// Position of the offending group.
        group: usize,
        /// The bounds the group must stay within.
        bounds: PartitionBounds,
    },

    /// A group starts at or before the end of the group sorted before it.
    #[error("Group ranges should not overlap.")]
    OverlappingRanges {
        /// Position of the group that starts too early.
        group: usize,
        /// Position of the group it overlaps.
        previous: usize,
    },

    /// The groups do not cover every integer of the bounds exactly once.
    #[error("The entire range of {bounds} should be covered.")]
    IncompleteCoverage {
        /// Number of integers the groups cover.
        covered: u64,
        /// The bounds that must be covered.
        bounds: PartitionBounds,
    },
}

impl PartitionError {
    /// Returns the 1-based position of the group the error is about, when it
    /// concerns a single group.
    #[must_use]
    pub const fn group(&self) -> Option<usize> {
        match self {
            Self::IncompleteRange { group }
            | Self::InvalidRangeOrder { group, .. }
            | Self::OutOfBounds { group, .. }
            | Self::OverlappingRanges { group, .. } => Some(*group),
            Self::IncompleteCoverage { .. } => None,
        }
    }
}
