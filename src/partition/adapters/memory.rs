//! In-memory status provider for tests and offline demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, PoisonError, RwLock};

use crate::partition::{
    domain::ItemStatus,
    ports::{StatusProvider, StatusProviderError, StatusProviderResult},
};

/// Thread-safe in-memory status provider.
///
/// Answers from a fixed id-to-flag table and records every requested id in
/// request order. Ids missing from the table fail with
/// [`StatusProviderError::UnknownItem`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusProvider {
    state: Arc<RwLock<InMemoryStatusState>>,
}

#[derive(Debug, Default)]
struct InMemoryStatusState {
    statuses: HashMap<i64, bool>,
    requests: Vec<i64>,
}

impl InMemoryStatusProvider {
    /// Creates a provider that knows no items.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider knowing every id in `ids`, with the flag chosen by
    /// `completed`.
    #[must_use]
    pub fn from_fn(ids: RangeInclusive<i64>, completed: impl Fn(i64) -> bool) -> Self {
        let statuses = ids.map(|id| (id, completed(id))).collect();
        Self {
            state: Arc::new(RwLock::new(InMemoryStatusState {
                statuses,
                requests: Vec::new(),
            })),
        }
    }

    /// Sets the status of one item.
    #[must_use]
    pub fn with_status(self, id: i64, completed: bool) -> Self {
        self.set_status(id, completed);
        self
    }

    /// Sets the status of one item on a shared provider.
    pub fn set_status(&self, id: i64, completed: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.statuses.insert(id, completed);
    }

    /// Forgets an item so lookups of it fail.
    pub fn forget(&self, id: i64) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.statuses.remove(&id);
    }

    /// Returns every requested id in request order.
    #[must_use]
    pub fn requested_ids(&self) -> Vec<i64> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.requests.clone()
    }
}

#[async_trait]
impl StatusProvider for InMemoryStatusProvider {
    async fn fetch_status(&self, id: i64) -> StatusProviderResult<ItemStatus> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.requests.push(id);
        state
            .statuses
            .get(&id)
            .map(|completed| ItemStatus::new(*completed))
            .ok_or(StatusProviderError::UnknownItem(id))
    }
}
