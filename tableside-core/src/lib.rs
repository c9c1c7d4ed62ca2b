//! Core domain types for the Tableside restaurant feed engine.
//!
//! This crate defines the vocabulary shared by every part of the system:
//! raw provider place records, the canonical [`Restaurant`] shape served to
//! clients, the user interaction log, and the collaborator seams
//! ([`PlacesProvider`], [`InteractionStore`], [`IdentityResolver`]) the feed
//! pipeline consumes. Coordinates are WGS84 `geo::Coord` values with
//! `x = longitude` and `y = latitude`.

#![forbid(unsafe_code)]

mod distance;
mod identity;
mod interaction;
mod place;
mod provider;
mod restaurant;
mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_M, haversine_distance_m};
pub use identity::{IdentityError, IdentityResolver, UserId};
pub use interaction::{InteractionAction, InteractionEvent, InteractionSignal};
pub use place::{
    LatLng, LocalizedText, OpeningHours, PLACE_RESOURCE_PREFIX, PlacePage, PriceLevel, RawPhoto,
    RawPlace,
};
pub use provider::{NearbyQuery, PlacesProvider, ProviderError};
pub use restaurant::{Restaurant, ScoreDiagnostics};
pub use store::{InteractionStore, StoreError};
