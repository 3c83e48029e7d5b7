//! Completion statuses gathered for each group.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status payload returned by a status provider for one item.
///
/// Only the completion flag is required; any other fields the remote
/// service sends are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    /// Whether the item is completed.
    pub completed: bool,
}

impl ItemStatus {
    /// Creates a status payload.
    #[must_use]
    pub const fn new(completed: bool) -> Self {
        Self { completed }
    }
}

/// Completion status of one item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Item id that was looked up.
    pub id: i64,
    /// Whether the item is completed.
    pub completed: bool,
}

impl StatusEntry {
    /// Creates a status entry.
    #[must_use]
    pub const fn new(id: i64, completed: bool) -> Self {
        Self { id, completed }
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            f.write_str("Completed")
        } else {
            f.write_str("Not Completed")
        }
    }
}

/// Status entries for one group, ascending by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupResult(Vec<StatusEntry>);

impl GroupResult {
    /// Creates an empty group result.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: StatusEntry) {
        self.0.push(entry);
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[StatusEntry] {
        &self.0
    }

    /// Returns the ids of the entries in order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.0.iter().map(|entry| entry.id).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries were gathered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<StatusEntry> for GroupResult {
    fn from_iter<I: IntoIterator<Item = StatusEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for GroupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.0.iter();
        if let Some(first) = entries.next() {
            write!(f, "{first}")?;
        }
        for entry in entries {
            write!(f, "; {entry}")?;
        }
        Ok(())
    }
}

/// Group results of one successful aggregation pass, in group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    groups: Vec<GroupResult>,
    fetched_at: DateTime<Utc>,
}

impl ResultSet {
    /// Creates a result set stamped with the clock's current time.
    #[must_use]
    pub fn new(groups: Vec<GroupResult>, clock: &impl Clock) -> Self {
        Self {
            groups,
            fetched_at: clock.utc(),
        }
    }

    /// Returns the group results in group order.
    #[must_use]
    pub fn groups(&self) -> &[GroupResult] {
        &self.groups
    }

    /// Returns the result for the group at `index`.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&GroupResult> {
        self.groups.get(index)
    }

    /// Returns when the results were gathered.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of group results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when the set holds no group results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drops the result for a deleted group so later results stay aligned
    /// with their groups. Returns the removed result, if there was one.
    pub fn remove_group(&mut self, index: usize) -> Option<GroupResult> {
        (index < self.groups.len()).then(|| self.groups.remove(index))
    }
}
