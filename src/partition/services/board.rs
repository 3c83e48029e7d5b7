//! Shared state owner for the group sequence and its visible results.

use crate::partition::domain::{
    GroupBound, GroupDomainError, GroupField, GroupRange, GroupSequence, PartitionBounds, ResultSet,
};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Identifies one aggregation pass. Tags increase with every launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassTag(u64);

impl PassTag {
    /// Returns the numeric tag.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened to a finished pass's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassSettlement {
    /// The pass was the latest launched; its outcome took effect.
    Applied,
    /// A newer pass was launched meanwhile; the outcome was discarded.
    Superseded {
        /// The newest launched pass.
        latest: PassTag,
    },
}

/// Single source of truth for the group sequence, the visible result set and
/// the loading flag.
///
/// Construct one per session and share it by cloning the handle; clones
/// observe the same state.
#[derive(Debug, Clone)]
pub struct GroupBoard {
    state: Arc<RwLock<BoardState>>,
}

#[derive(Debug)]
struct BoardState {
    groups: GroupSequence,
    results: Option<ResultSet>,
    latest_pass: Option<PassTag>,
    loading: bool,
}

impl GroupBoard {
    /// Creates a board whose single group covers `bounds`.
    #[must_use]
    pub fn new(bounds: PartitionBounds) -> Self {
        Self::with_groups(GroupSequence::covering(bounds))
    }

    /// Creates a board holding `groups`.
    #[must_use]
    pub fn with_groups(groups: GroupSequence) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState {
                groups,
                results: None,
                latest_pass: None,
                loading: false,
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the groups.
    #[must_use]
    pub fn groups(&self) -> GroupSequence {
        self.read().groups.clone()
    }

    /// Returns the visible result set, if a pass has succeeded.
    #[must_use]
    pub fn results(&self) -> Option<ResultSet> {
        self.read().results.clone()
    }

    /// Returns `true` while the latest launched pass is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Returns the most recently launched pass, if any.
    #[must_use]
    pub fn latest_pass(&self) -> Option<PassTag> {
        self.read().latest_pass
    }

    /// Appends a group. Nothing about the group is checked.
    pub fn add_group(&self, range: GroupRange) {
        self.write().groups.push(range);
    }

    /// Deletes the group at `index`, together with its visible result.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::LastGroup`] when only one group remains and
    /// [`GroupDomainError::IndexOutOfRange`] for an unknown index. State is
    /// unchanged on error.
    pub fn delete_group(&self, index: usize) -> Result<GroupRange, GroupDomainError> {
        let mut state = self.write();
        if state.groups.len() <= 1 {
            return Err(GroupDomainError::LastGroup);
        }
        let removed = state.groups.remove(index)?;
        if let Some(results) = state.results.as_mut() {
            results.remove_group(index);
        }
        Ok(removed)
    }

    /// Sets a field of the group at `index` from raw input; see
    /// [`GroupSequence::update`].
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::IndexOutOfRange`] for an unknown index.
    pub fn update_group(
        &self,
        index: usize,
        field: GroupField,
        raw: &str,
    ) -> Result<GroupBound, GroupDomainError> {
        self.write().groups.update(index, field, raw)
    }

    /// Launches a pass: issues the next tag and raises the loading flag.
    pub fn begin_pass(&self) -> PassTag {
        let mut state = self.write();
        let next = PassTag(state.latest_pass.map_or(1, |tag| tag.0.saturating_add(1)));
        state.latest_pass = Some(next);
        state.loading = true;
        next
    }

    /// Publishes a pass's results if it is still the latest pass.
    pub fn complete_pass(&self, tag: PassTag, results: ResultSet) -> PassSettlement {
        let mut state = self.write();
        let settlement = settle(&mut state, tag);
        if settlement == PassSettlement::Applied {
            state.results = Some(results);
        }
        settlement
    }

    /// Records that a pass failed. The visible results are kept; the loading
    /// flag is cleared if the pass is still the latest.
    pub fn fail_pass(&self, tag: PassTag) -> PassSettlement {
        settle(&mut self.write(), tag)
    }
}

impl Default for GroupBoard {
    fn default() -> Self {
        Self::new(PartitionBounds::default())
    }
}

fn settle(state: &mut BoardState, tag: PassTag) -> PassSettlement {
    match state.latest_pass {
        Some(latest) if latest != tag => PassSettlement::Superseded { latest },
        _ => {
            state.loading = false;
            PassSettlement::Applied
        }
    }
}
