//! Read access to the user interaction log.
//!
//! The log is append-only and owned elsewhere; this seam only reads it.
//! Ordering is not guaranteed by the interface: the aggregator sorts by
//! creation time before folding, so implementations may return events in
//! any order.

use async_trait::async_trait;
use thiserror::Error;

use crate::{InteractionEvent, UserId};

/// Errors surfaced by an [`InteractionStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The log could not be read.
    #[error("interaction log unavailable: {message}")]
    Unavailable {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Read a user's interaction events.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Return every recorded event for `user`, in any order.
    ///
    /// A user with no history yields an empty vector, not an error.
    async fn events_for_user(&self, user: &UserId)
    -> Result<Vec<InteractionEvent>, StoreError>;
}
