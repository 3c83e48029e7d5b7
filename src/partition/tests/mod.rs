//! Unit tests for group partitioning and status aggregation.

mod board_tests;
