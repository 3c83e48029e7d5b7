//! The ordered, user-edited sequence of groups.

use super::{GroupBound, GroupDomainError, GroupField, GroupRange, PartitionBounds};
use serde::{Deserialize, Serialize};

/// Ordered list of groups.
///
/// Position defines the group's label ("Group 1", "Group 2", ...) and the
/// order of its status results. The partition invariant is not enforced
/// here; overlapping, reversed and out-of-bounds groups are all accepted
/// until the sequence is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSequence(Vec<GroupRange>);

impl GroupSequence {
    /// Creates a sequence holding one group.
    #[must_use]
    pub fn single(range: GroupRange) -> Self {
        Self(vec![range])
    }

    /// Creates the initial sequence: one group covering `bounds`.
    #[must_use]
    pub fn covering(bounds: PartitionBounds) -> Self {
        Self::single(bounds.full_range())
    }

    /// Creates a sequence from existing groups.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::EmptySequence`] when `groups` is empty.
    pub fn from_groups(groups: impl IntoIterator<Item = GroupRange>) -> Result<Self, GroupDomainError> {
        let collected: Vec<GroupRange> = groups.into_iter().collect();
        if collected.is_empty() {
            return Err(GroupDomainError::EmptySequence);
        }
        Ok(Self(collected))
    }

    /// Returns the groups in order.
    #[must_use]
    pub fn as_slice(&self) -> &[GroupRange] {
        &self.0
    }

    /// Iterates the groups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, GroupRange> {
        self.0.iter()
    }

    /// Returns the group at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GroupRange> {
        self.0.get(index)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the sequence holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a group without checking it.
    pub fn push(&mut self, range: GroupRange) {
        self.0.push(range);
    }

    /// Removes and returns the group at `index`.
    ///
    /// Refusing to remove the last remaining group is the caller's job; see
    /// [`crate::partition::services::GroupBoard::delete_group`].
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::IndexOutOfRange`] when `index` does not
    /// address a group.
    pub fn remove(&mut self, index: usize) -> Result<GroupRange, GroupDomainError> {
        if index >= self.0.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.0.remove(index))
    }

    /// Sets one field of the group at `index` from raw user input and returns
    /// the stored bound.
    ///
    /// The input is parsed with [`GroupBound::parse_lenient`], so blank or
    /// malformed input stores the empty marker.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::IndexOutOfRange`] when `index` does not
    /// address a group.
    pub fn update(
        &mut self,
        index: usize,
        field: GroupField,
        raw: &str,
    ) -> Result<GroupBound, GroupDomainError> {
        let len = self.0.len();
        let range = self
            .0
            .get_mut(index)
            .ok_or(GroupDomainError::IndexOutOfRange { index, len })?;
        let bound = GroupBound::parse_lenient(raw);
        range.set(field, bound);
        Ok(bound)
    }

    fn out_of_range(&self, index: usize) -> GroupDomainError {
        GroupDomainError::IndexOutOfRange {
            index,
            len: self.0.len(),
        }
    }
}

impl Default for GroupSequence {
    fn default() -> Self {
        Self::covering(PartitionBounds::default())
    }
}

impl<'a> IntoIterator for &'a GroupSequence {
    type Item = &'a GroupRange;
    type IntoIter = std::slice::Iter<'a, GroupRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
