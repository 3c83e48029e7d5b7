//! Partition validation implementation.
//!
//! This module provides the default implementation of partition
//! validation, including the individual rules and the validator service that
//! applies them in order.

pub mod rules;
pub mod service;

pub use service::DefaultPartitionValidator;
