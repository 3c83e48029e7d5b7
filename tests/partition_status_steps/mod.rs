//! Step definitions for group partition status scenarios.

mod given;
mod then;
mod when;
pub mod world;
