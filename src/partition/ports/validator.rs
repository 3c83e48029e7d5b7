//! Validator port for group partitions.

use crate::partition::{domain::GroupSequence, error::PartitionResult};

/// Port for deciding whether a group sequence is a valid partition.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Stop at the first failing rule and report it (fail-fast)
/// - Leave the sequence untouched
/// - Be stateless and thread-safe
pub trait PartitionValidator: Send + Sync {
    /// Validates the sequence.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::partition::error::PartitionError`] that
    /// applies.
    fn validate(&self, groups: &GroupSequence) -> PartitionResult<()>;
}
