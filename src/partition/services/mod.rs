//! Application services for group editing and status aggregation.

mod aggregation;
mod board;

pub use aggregation::{
    ShowStatusError, ShowStatusOutcome, ShowStatusResult, StatusAggregationService,
};
pub use board::{GroupBoard, PassSettlement, PassTag};
