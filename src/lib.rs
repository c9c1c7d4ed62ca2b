//! Facade crate for the Tableside restaurant feed engine.
//!
//! This crate re-exports the domain vocabulary from `tableside-core` and the
//! ranking pipeline from `tableside-feed` so callers can depend on a single
//! crate. The optional `test-support` feature exposes the in-memory
//! collaborator implementations for integration tests.

#![forbid(unsafe_code)]

pub use tableside_core::{
    EARTH_RADIUS_M, IdentityError, IdentityResolver, InteractionAction, InteractionEvent,
    InteractionSignal, InteractionStore, LatLng, LocalizedText, NearbyQuery, OpeningHours,
    PLACE_RESOURCE_PREFIX, PlacePage, PlacesProvider, PriceLevel, ProviderError, RawPhoto,
    RawPlace, Restaurant, ScoreDiagnostics, StoreError, UserId, haversine_distance_m,
};

pub use tableside_feed::{
    FALLBACK_CUISINE, FeedAssembler, FeedConfig, FeedError, FeedPage, FeedRequest, MAX_RADIUS_M,
    MIN_RADIUS_M, ScoreWeights, UNKNOWN_NAME, latest_signals, normalize_place, score_place,
};

#[cfg(feature = "test-support")]
pub use tableside_core::test_support;
