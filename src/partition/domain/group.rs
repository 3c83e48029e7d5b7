//! Group ranges and their editable bounds.

use super::ParseGroupFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// One end of a group range: an integer, or the empty marker when the user
/// has not entered a usable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupBound(Option<i64>);

impl GroupBound {
    /// The empty marker.
    pub const EMPTY: Self = Self(None);

    /// Creates a bound holding `value`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// Parses raw user input leniently.
    ///
    /// Blank input maps to [`GroupBound::EMPTY`]. Anything else is trimmed and
    /// parsed as a decimal integer; input that does not parse also collapses
    /// to the empty marker instead of producing an error.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::EMPTY;
        }
        trimmed.parse::<i64>().map_or(Self::EMPTY, Self::new)
    }

    /// Returns the integer value, if any.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        self.0
    }

    /// Returns `true` for the empty marker.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

impl From<i64> for GroupBound {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for GroupBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("_"),
        }
    }
}

/// Names one of the two editable fields of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupField {
    /// The inclusive lower end.
    From,
    /// The inclusive upper end.
    To,
}

impl GroupField {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

impl FromStr for GroupField {
    type Err = ParseGroupFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "from" => Ok(Self::From),
            "to" => Ok(Self::To),
            _ => Err(ParseGroupFieldError(value.to_owned())),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-defined closed interval `[from, to]`.
///
/// Either end may be empty while the user is still editing. Nothing about
/// the range is checked on construction; validity is decided when the whole
/// sequence is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupRange {
    from: GroupBound,
    to: GroupBound,
}

impl GroupRange {
    /// Creates a range from two bounds.
    #[must_use]
    pub const fn new(from: GroupBound, to: GroupBound) -> Self {
        Self { from, to }
    }

    /// Creates a range with both ends empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(GroupBound::EMPTY, GroupBound::EMPTY)
    }

    /// Creates a range with both ends set.
    #[must_use]
    pub const fn bounded(from: i64, to: i64) -> Self {
        Self::new(GroupBound::new(from), GroupBound::new(to))
    }

    /// Returns the lower end.
    #[must_use]
    pub const fn from(&self) -> GroupBound {
        self.from
    }

    /// Returns the upper end.
    #[must_use]
    pub const fn to(&self) -> GroupBound {
        self.to
    }

    /// Returns the named field.
    #[must_use]
    pub const fn field(&self, field: GroupField) -> GroupBound {
        match field {
            GroupField::From => self.from,
            GroupField::To => self.to,
        }
    }

    /// Overwrites the named field.
    pub const fn set(&mut self, field: GroupField, bound: GroupBound) {
        match field {
            GroupField::From => self.from = bound,
            GroupField::To => self.to = bound,
        }
    }

    /// Returns the covered item ids when both ends are set.
    ///
    /// A reversed range yields an empty iterator.
    #[must_use]
    pub fn ids(&self) -> Option<RangeInclusive<i64>> {
        Some(self.from.value()?..=self.to.value()?)
    }

    /// Number of integers the range covers; zero when an end is empty or the
    /// range is reversed.
    #[must_use]
    pub fn covered_count(&self) -> u64 {
        let (Some(from), Some(to)) = (self.from.value(), self.to.value()) else {
            return 0;
        };
        to.checked_sub(from)
            .and_then(|span| span.checked_add(1))
            .and_then(|count| u64::try_from(count).ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for GroupRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
