//! Default partition validator service.

use super::rules::{coverage_count, sorted_by_from, validate_coverage, validate_group};
use crate::partition::{
    domain::{GroupSequence, PartitionBounds},
    error::PartitionResult,
    ports::PartitionValidator,
};

/// Default implementation of [`PartitionValidator`].
///
/// Walks the groups sorted by `from`, applying the per-group rules to each
/// in turn, then checks total coverage against the bounds.
///
/// # Examples
///
/// ```
/// use groupstatus::partition::{
///     domain::{GroupRange, GroupSequence},
///     error::PartitionError,
///     ports::PartitionValidator,
///     validation::DefaultPartitionValidator,
/// };
///
/// let validator = DefaultPartitionValidator::default();
///
/// let split = GroupSequence::from_groups([GroupRange::bounded(6, 10), GroupRange::bounded(1, 5)])
///     .expect("non-empty sequence");
/// assert!(validator.validate(&split).is_ok());
///
/// let short = GroupSequence::from_groups([GroupRange::bounded(1, 5), GroupRange::bounded(6, 9)])
///     .expect("non-empty sequence");
/// assert!(matches!(
///     validator.validate(&short),
///     Err(PartitionError::IncompleteCoverage { covered: 9, .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPartitionValidator {
    bounds: PartitionBounds,
}

impl DefaultPartitionValidator {
    /// Creates a validator for the given bounds.
    #[must_use]
    pub const fn new(bounds: PartitionBounds) -> Self {
        Self { bounds }
    }

    /// Returns the bounds the validator checks against.
    #[must_use]
    pub const fn bounds(&self) -> PartitionBounds {
        self.bounds
    }
}

impl PartitionValidator for DefaultPartitionValidator {
    fn validate(&self, groups: &GroupSequence) -> PartitionResult<()> {
        let covered = coverage_count(groups.as_slice());

        let mut previous = None;
        for (position, range) in sorted_by_from(groups.as_slice()) {
            previous = Some(validate_group(position, range, self.bounds, previous)?);
        }

        validate_coverage(covered, self.bounds)
    }
}
