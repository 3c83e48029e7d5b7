//! Group partitioning and status aggregation.
//!
//! This module owns the editable group sequence, decides whether it forms a
//! valid partition of the configured bounds, and drives sequential status
//! lookups for every covered item. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Validation rules and the default validator in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
