//! Port contracts for partition validation and status lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by partition
//! services.

pub mod status_provider;
pub mod validator;

pub use status_provider::{StatusProvider, StatusProviderError, StatusProviderResult};
pub use validator::PartitionValidator;

#[cfg(test)]
pub use status_provider::MockStatusProvider;
