//! The upstream places provider seam.
//!
//! The provider is an external data source: given an origin, a radius, and
//! an optional continuation token it returns one [`PlacePage`] of raw
//! records. Failures surface as a single opaque fetch error; the feed never
//! builds a partial page from a failed fetch.

use async_trait::async_trait;
use geo::Coord;
use thiserror::Error;

use crate::PlacePage;

/// Query parameters for one nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Search origin, `x = longitude`, `y = latitude`.
    pub origin: Coord<f64>,
    /// Search radius in metres, already clamped by the caller.
    pub radius_m: f64,
    /// Continuation token from a previous page, if resuming.
    pub page_token: Option<String>,
}

/// Errors surfaced by a [`PlacesProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The upstream call failed or returned a non-success status.
    #[error("nearby search failed: {message}")]
    Fetch {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Fetch raw places near an origin.
///
/// Implementations must be `Send + Sync` so one provider can serve
/// concurrent requests. There is no retry contract: a failed call is
/// reported once and retrying, if desired, is the caller's responsibility.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Return one page of raw places for `query`.
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<PlacePage, ProviderError>;
}
