//! Domain model for group partitioning.
//!
//! The domain models editable group ranges, the ordered group sequence, the
//! partition bounds they must cover, and the status results gathered for each
//! group, while keeping all infrastructure concerns outside of the domain
//! boundary.

mod bounds;
mod error;
mod group;
mod sequence;
mod status;

pub use bounds::PartitionBounds;
pub use error::{GroupDomainError, ParseGroupFieldError};
pub use group::{GroupBound, GroupField, GroupRange};
pub use sequence::GroupSequence;
pub use status::{GroupResult, ItemStatus, ResultSet, StatusEntry};
