//! Individual partition rule implementations.
//!
//! Each rule is a pure function checking one aspect of one group (or of the
//! sequence as a whole). Rules return `Ok(..)` on success or the specific
//! [`PartitionError`] on failure. Group positions are 1-based.

use crate::partition::{
    domain::{GroupRange, PartitionBounds},
    error::{PartitionError, PartitionResult},
};

/// A group that passed the per-group rules, with concrete ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedGroup {
    /// 1-based position in the sequence as entered.
    pub position: usize,
    /// Inclusive lower end.
    pub from: i64,
    /// Inclusive upper end.
    pub to: i64,
}

/// Returns `(position, group)` pairs sorted ascending by `from`.
///
/// The sort is stable. Groups with an empty `from` sort before every
/// integer, so they are reported before any ordering problem of a set group.
#[must_use]
pub fn sorted_by_from(groups: &[GroupRange]) -> Vec<(usize, &GroupRange)> {
    let mut sorted: Vec<(usize, &GroupRange)> = groups
        .iter()
        .enumerate()
        .map(|(index, range)| (index + 1, range))
        .collect();
    sorted.sort_by_key(|(_, range)| range.from().value());
    sorted
}

/// Total number of integers covered by the groups, counted per group.
///
/// Reversed or incomplete groups contribute nothing; overlapping groups are
/// counted twice.
#[must_use]
pub fn coverage_count(groups: &[GroupRange]) -> u64 {
    groups
        .iter()
        .map(GroupRange::covered_count)
        .fold(0, u64::saturating_add)
}

/// Validates that both ends of a group are set.
///
/// # Errors
///
/// Returns [`PartitionError::IncompleteRange`] if either end is empty.
pub fn validate_complete(position: usize, range: &GroupRange) -> PartitionResult<(i64, i64)> {
    match (range.from().value(), range.to().value()) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(PartitionError::IncompleteRange { group: position }),
    }
}

/// Validates that `from` is strictly less than `to`.
///
/// Single-item groups are rejected along with reversed ones.
///
/// # Errors
///
/// Returns [`PartitionError::InvalidRangeOrder`] if `from >= to`.
pub const fn validate_order(position: usize, from: i64, to: i64) -> PartitionResult<()> {
    if from >= to {
        return Err(PartitionError::InvalidRangeOrder {
            group: position,
            from,
            to,
        });
    }
    Ok(())
}

/// Validates that the group stays within the partition bounds.
///
/// # Errors
///
/// Returns [`PartitionError::OutOfBounds`] if `from` is below the lower bound
/// or `to` is above the upper bound.
pub const fn validate_within(
    position: usize,
    from: i64,
    to: i64,
    bounds: PartitionBounds,
) -> PartitionResult<()> {
    if from < bounds.lower() || to > bounds.upper() {
        return Err(PartitionError::OutOfBounds {
            group: position,
            bounds,
        });
    }
    Ok(())
}

/// Validates that a group starts after the previous sorted group ends.
///
/// # Errors
///
/// Returns [`PartitionError::OverlappingRanges`] if `from` is at or before
/// the previous group's `to`.
pub const fn validate_disjoint(
    position: usize,
    from: i64,
    previous: Option<CheckedGroup>,
) -> PartitionResult<()> {
    if let Some(prev) = previous {
        if from <= prev.to {
            return Err(PartitionError::OverlappingRanges {
                group: position,
                previous: prev.position,
            });
        }
    }
    Ok(())
}

/// Runs the per-group rules in order: completeness, ordering, bounds, then
/// overlap with the previous sorted group.
///
/// # Errors
///
/// Returns the first failing rule's error.
pub fn validate_group(
    position: usize,
    range: &GroupRange,
    bounds: PartitionBounds,
    previous: Option<CheckedGroup>,
) -> PartitionResult<CheckedGroup> {
    let (from, to) = validate_complete(position, range)?;
    validate_order(position, from, to)?;
    validate_within(position, from, to, bounds)?;
    validate_disjoint(position, from, previous)?;
    Ok(CheckedGroup { position, from, to })
}

/// Validates that the groups cover exactly as many integers as the bounds
/// span.
///
/// # Errors
///
/// Returns [`PartitionError::IncompleteCoverage`] if the counts differ.
pub fn validate_coverage(covered: u64, bounds: PartitionBounds) -> PartitionResult<()> {
    if covered != bounds.span() {
        return Err(PartitionError::IncompleteCoverage { covered, bounds });
    }
    Ok(())
}
