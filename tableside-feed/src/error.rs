//! Errors surfaced by the feed assembler.

use tableside_core::ProviderError;
use thiserror::Error;

/// Errors a feed request can surface to its caller.
///
/// Only bad input and upstream failures are reported. Identity failures and
/// malformed individual records are absorbed inside the pipeline and never
/// reach this type.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The origin coordinate was missing, non-finite, or out of range.
    ///
    /// Rejected before any upstream call is made.
    #[error("invalid origin coordinate ({latitude}, {longitude})")]
    InvalidOrigin {
        /// Latitude the caller supplied.
        latitude: f64,
        /// Longitude the caller supplied.
        longitude: f64,
    },
    /// The places provider call failed; no partial page is returned.
    #[error("upstream places fetch failed")]
    Upstream {
        /// The provider's fetch error.
        #[source]
        source: ProviderError,
    },
}
