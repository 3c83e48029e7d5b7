//! Error types for group store mutations and parsing.

use thiserror::Error;

/// Errors returned while mutating or constructing group domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupDomainError {
    /// Deleting the group would leave the sequence empty.
    #[error("At least one group must be present!")]
    LastGroup,

    /// The group index does not address an existing group.
    #[error("group index {index} is out of range for {len} groups")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of groups in the sequence.
        len: usize,
    },

    /// A group sequence was built from no groups.
    #[error("a group sequence needs at least one group")]
    EmptySequence,

    /// The partition bounds are not a usable range of positive integers.
    #[error("invalid partition bounds {lower}-{upper}, expected 1 <= lower < upper")]
    InvalidBounds {
        /// Requested lower bound.
        lower: i64,
        /// Requested upper bound.
        upper: i64,
    },
}

/// Error returned while parsing a group field name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown group field: {0}, expected 'from' or 'to'")]
pub struct ParseGroupFieldError(pub String);
