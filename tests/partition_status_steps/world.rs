//! Shared world state for group partition status BDD scenarios.

use std::sync::Arc;

use groupstatus::partition::{
    adapters::memory::InMemoryStatusProvider,
    domain::{GroupDomainError, GroupRange},
    services::{GroupBoard, ShowStatusError, ShowStatusOutcome, StatusAggregationService},
    validation::DefaultPartitionValidator,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestStatusService =
    StatusAggregationService<DefaultPartitionValidator, InMemoryStatusProvider, DefaultClock>;

/// Scenario world for partition status behaviour tests.
pub struct PartitionWorld {
    pub board: GroupBoard,
    pub provider: InMemoryStatusProvider,
    pub service: TestStatusService,
    pub last_show_result: Option<Result<ShowStatusOutcome, ShowStatusError>>,
    pub last_delete_result: Option<Result<GroupRange, GroupDomainError>>,
}

impl PartitionWorld {
    /// Creates a world with the default board and a provider knowing no
    /// items.
    #[must_use]
    pub fn new() -> Self {
        let board = GroupBoard::default();
        let provider = InMemoryStatusProvider::new();
        let service = StatusAggregationService::new(
            board.clone(),
            Arc::new(DefaultPartitionValidator::default()),
            Arc::new(provider.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            board,
            provider,
            service,
            last_show_result: None,
            last_delete_result: None,
        }
    }
}

impl Default for PartitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PartitionWorld {
    PartitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
