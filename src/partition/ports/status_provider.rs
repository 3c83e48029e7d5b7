//! Status provider port: the remote source of per-item completion flags.

use crate::partition::domain::ItemStatus;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status lookups.
pub type StatusProviderResult<T> = Result<T, StatusProviderError>;

/// Lookup of an item's completion status by id.
///
/// Lookups are assumed idempotent and free of side effects. Callers await
/// one lookup before issuing the next.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Fetches the status of item `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusProviderError`] when the request cannot be completed
    /// or its response cannot be decoded.
    async fn fetch_status(&self, id: i64) -> StatusProviderResult<ItemStatus>;
}

/// Errors returned by status provider implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusProviderError {
    /// The request could not be sent or its body could not be read.
    #[error("status request for item {id} failed: {cause}")]
    Transport {
        /// Item being looked up.
        id: i64,
        /// Underlying failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The remote service answered with a non-success status code.
    #[error("status request for item {id} returned HTTP {status}")]
    UnexpectedStatus {
        /// Item being looked up.
        id: i64,
        /// HTTP status code.
        status: u16,
    },

    /// The response body is not a valid status payload.
    #[error("status response for item {id} could not be decoded: {cause}")]
    Decode {
        /// Item being looked up.
        id: i64,
        /// Underlying failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The provider has no status for the item.
    #[error("no status known for item {0}")]
    UnknownItem(i64),
}

impl StatusProviderError {
    /// Wraps a transport failure.
    #[must_use]
    pub fn transport(id: i64, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport {
            id,
            cause: Arc::new(err),
        }
    }

    /// Wraps a decoding failure.
    #[must_use]
    pub fn decode(id: i64, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode {
            id,
            cause: Arc::new(err),
        }
    }

    /// Returns the item id the failure concerns.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Transport { id, .. }
            | Self::UnexpectedStatus { id, .. }
            | Self::Decode { id, .. }
            | Self::UnknownItem(id) => *id,
        }
    }
}
