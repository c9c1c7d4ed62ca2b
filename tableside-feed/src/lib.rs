//! The restaurant feed ranking and pagination pipeline.
//!
//! The crate turns one page of raw provider results plus a caller's
//! interaction history into an ordered, deduplicated feed page:
//!
//! - [`latest_signals`] reduces the append-only event log to one
//!   most-recent signal per place.
//! - [`normalize_place`] maps a raw provider record into the canonical
//!   [`Restaurant`](tableside_core::Restaurant) shape.
//! - [`score_place`] combines the rating term with the interaction signal
//!   into a single ranking score, keeping the full breakdown for the
//!   diagnostic surface.
//! - [`FeedAssembler`] orchestrates the collaborators, filtering, sorting,
//!   and continuation-token passthrough.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use tableside_core::test_support::{
//!     MemoryInteractionStore, StaticIdentityResolver, StaticPlacesProvider,
//! };
//! use tableside_core::PlacePage;
//! use tableside_feed::{FeedAssembler, FeedRequest};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), tableside_feed::FeedError> {
//! let assembler = FeedAssembler::new(
//!     StaticPlacesProvider::new(PlacePage::default()),
//!     MemoryInteractionStore::default(),
//!     StaticIdentityResolver::new(None),
//! );
//! let page = assembler
//!     .assemble(&FeedRequest::at(Coord { x: -0.1278, y: 51.5074 }))
//!     .await?;
//! assert!(page.restaurants.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod assemble;
mod error;
mod normalize;
mod score;

pub use aggregate::latest_signals;
pub use assemble::{FeedAssembler, FeedConfig, FeedPage, FeedRequest, MAX_RADIUS_M, MIN_RADIUS_M};
pub use error::FeedError;
pub use normalize::{FALLBACK_CUISINE, UNKNOWN_NAME, normalize_place};
pub use score::{ScoreWeights, score_place};
