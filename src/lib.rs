//! Groupstatus: partition an integer range into groups and aggregate
//! per-item completion status.
//!
//! The crate validates that a user-edited sequence of group ranges forms a
//! total, non-overlapping partition of `1..=10`, then queries an external
//! status provider for every covered integer, one request at a time, and
//! returns the statuses grouped in the order the groups were entered.
//!
//! # Architecture
//!
//! Groupstatus follows hexagonal architecture principles:
//!
//! - **Domain**: Pure group, bound and status types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for validation and status lookup
//! - **Adapters**: Concrete status providers (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`partition`]: Group store, partition validation and status aggregation
//! - [`config`]: Environment-driven runtime configuration

pub mod config;
pub mod partition;
