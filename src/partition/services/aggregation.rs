//! Service layer for validating groups and aggregating item statuses.

use crate::partition::{
    domain::{GroupResult, GroupSequence, ResultSet, StatusEntry},
    error::PartitionError,
    ports::{PartitionValidator, StatusProvider, StatusProviderError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::board::{GroupBoard, PassSettlement, PassTag};

/// Service-level errors for a "show status" request.
#[derive(Debug, Clone, Error)]
pub enum ShowStatusError {
    /// The groups are not a valid partition; no lookup was made.
    #[error(transparent)]
    Validation(#[from] PartitionError),

    /// A status lookup failed and the pass was aborted.
    #[error("something went wrong while loading task status: {cause}")]
    Lookup {
        /// The aborted pass.
        tag: PassTag,
        /// The failing lookup.
        cause: StatusProviderError,
    },
}

/// Result type for status aggregation operations.
pub type ShowStatusResult<T> = Result<T, ShowStatusError>;

/// Outcome of a launched pass that did not fail as the latest pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowStatusOutcome {
    /// The results are now visible on the board.
    Applied {
        /// The pass that produced the results.
        tag: PassTag,
        /// The published results.
        results: ResultSet,
    },
    /// A newer pass was launched before this one finished; its results, or
    /// its failure, were discarded.
    Superseded {
        /// The discarded pass.
        tag: PassTag,
        /// The newest launched pass.
        latest: PassTag,
    },
}

/// Validation and status aggregation orchestration service.
///
/// Lookups are strictly sequential: the lookup for one id starts only after
/// the previous one has resolved, groups are visited in sequence order and
/// ids ascending within a group.
pub struct StatusAggregationService<V, P, C>
where
    V: PartitionValidator,
    P: StatusProvider,
    C: Clock + Send + Sync,
{
    board: GroupBoard,
    validator: Arc<V>,
    provider: Arc<P>,
    clock: Arc<C>,
}

impl<V, P, C> StatusAggregationService<V, P, C>
where
    V: PartitionValidator,
    P: StatusProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new aggregation service over a shared board.
    #[must_use]
    pub const fn new(board: GroupBoard, validator: Arc<V>, provider: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            board,
            validator,
            provider,
            clock,
        }
    }

    /// Returns the board this service reads and publishes to.
    #[must_use]
    pub const fn board(&self) -> &GroupBoard {
        &self.board
    }

    /// Validates the current groups without touching the network.
    ///
    /// # Errors
    ///
    /// Returns the first [`PartitionError`] that applies.
    pub fn validate(&self) -> Result<GroupSequence, PartitionError> {
        let groups = self.board.groups();
        self.validator.validate(&groups)?;
        Ok(groups)
    }

    /// Validates the groups and, if they form a partition, looks up every
    /// covered item and publishes the results.
    ///
    /// The loading flag is raised for the duration of the pass and cleared
    /// however it ends. A pass overtaken by a newer one ends as
    /// [`ShowStatusOutcome::Superseded`] whether it gathered every status or
    /// hit a failing lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ShowStatusError::Validation`] before any lookup when the
    /// groups are invalid, and [`ShowStatusError::Lookup`] when a lookup of the
    /// latest pass fails; in both cases previously visible results stay in
    /// place.
    pub async fn show_status(&self) -> ShowStatusResult<ShowStatusOutcome> {
        let groups = self.validate()?;

        let tag = self.board.begin_pass();
        info!(pass = %tag, groups = groups.len(), "status pass started");

        let gathered = match self.collect(&groups).await {
            Ok(gathered) => gathered,
            Err(cause) => {
                return match self.board.fail_pass(tag) {
                    PassSettlement::Applied => {
                        warn!(pass = %tag, error = %cause, "status pass failed");
                        Err(ShowStatusError::Lookup { tag, cause })
                    }
                    PassSettlement::Superseded { latest } => {
                        debug!(
                            pass = %tag,
                            latest = %latest,
                            error = %cause,
                            "superseded status pass failed"
                        );
                        Ok(ShowStatusOutcome::Superseded { tag, latest })
                    }
                };
            }
        };

        let results = ResultSet::new(gathered, &*self.clock);
        match self.board.complete_pass(tag, results.clone()) {
            PassSettlement::Applied => {
                info!(pass = %tag, "status pass applied");
                Ok(ShowStatusOutcome::Applied { tag, results })
            }
            PassSettlement::Superseded { latest } => {
                debug!(pass = %tag, latest = %latest, "status pass superseded");
                Ok(ShowStatusOutcome::Superseded { tag, latest })
            }
        }
    }

    async fn collect(&self, groups: &GroupSequence) -> Result<Vec<GroupResult>, StatusProviderError> {
        let mut gathered = Vec::with_capacity(groups.len());
        for range in groups {
            let mut group_result = GroupResult::new();
            for id in range.ids().into_iter().flatten() {
                debug!(id, "looking up item status");
                let status = self.provider.fetch_status(id).await?;
                group_result.push(StatusEntry::new(id, status.completed));
            }
            gathered.push(group_result);
        }
        Ok(gathered)
    }
}
