//! Orchestrate normalization, scoring, filtering, ordering, and pagination
//! into one feed page.

use std::collections::{HashMap, HashSet};

use geo::Coord;
use log::warn;
use serde::Serialize;
use tableside_core::{
    IdentityResolver, InteractionSignal, InteractionStore, NearbyQuery, PlacesProvider,
    Restaurant, ScoreDiagnostics,
};

use crate::aggregate::latest_signals;
use crate::error::FeedError;
use crate::normalize::{UNKNOWN_NAME, normalize_place};
use crate::score::{ScoreWeights, score_place};

/// Smallest radius ever sent to the provider, in metres.
pub const MIN_RADIUS_M: f64 = 100.0;

/// Largest radius ever sent to the provider, in metres.
pub const MAX_RADIUS_M: f64 = 50_000.0;

const DEFAULT_RADIUS_M: f64 = 1_500.0;

/// Configuration for a [`FeedAssembler`].
///
/// Passed in explicitly so the pipeline stays testable without any
/// process-environment setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedConfig {
    /// Radius used when a request does not specify one.
    pub default_radius_m: f64,
    /// Ranking constants.
    pub weights: ScoreWeights,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_radius_m: DEFAULT_RADIUS_M,
            weights: ScoreWeights::default(),
        }
    }
}

/// One logical feed request.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRequest {
    /// Search origin, `x = longitude`, `y = latitude`.
    pub origin: Coord<f64>,
    /// Requested radius in metres; clamped into
    /// [`MIN_RADIUS_M`]..=[`MAX_RADIUS_M`], defaulted from config when
    /// unset.
    pub radius_m: Option<f64>,
    /// Continuation token from a previous page.
    pub page_token: Option<String>,
    /// Opaque caller credential; absence means an anonymous,
    /// unpersonalized feed.
    pub credential: Option<String>,
    /// Whether the caller is an internal tester entitled to score
    /// diagnostics. Plumbed from a profile lookup outside this crate.
    pub include_diagnostics: bool,
}

impl FeedRequest {
    /// An anonymous request at `origin` with every option left default.
    #[must_use]
    pub fn at(origin: Coord<f64>) -> Self {
        Self {
            origin,
            radius_m: None,
            page_token: None,
            credential: None,
            include_diagnostics: false,
        }
    }
}

/// One ordered page of canonical restaurants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    /// Restaurants ordered by score descending, ties in provider order.
    pub restaurants: Vec<Restaurant>,
    /// Continuation token for the next page; `None` when the provider
    /// reported none or a blank one.
    pub next_page_token: Option<String>,
}

/// Assemble feed pages from the three collaborator seams.
///
/// Holds no per-request state; one assembler serves concurrent requests.
/// Within a request the provider fetch and the identity + interaction-log
/// fetch are independent reads issued concurrently; scoring waits for both.
#[derive(Debug)]
pub struct FeedAssembler<P, S, R> {
    provider: P,
    interactions: S,
    identity: R,
    config: FeedConfig,
}

impl<P, S, R> FeedAssembler<P, S, R>
where
    P: PlacesProvider,
    S: InteractionStore,
    R: IdentityResolver,
{
    /// Create an assembler with the default configuration.
    pub fn new(provider: P, interactions: S, identity: R) -> Self {
        Self::with_config(provider, interactions, identity, FeedConfig::default())
    }

    /// Create an assembler with explicit configuration.
    pub fn with_config(provider: P, interactions: S, identity: R, config: FeedConfig) -> Self {
        Self {
            provider,
            interactions,
            identity,
            config,
        }
    }

    /// Produce one feed page for `request`.
    ///
    /// # Errors
    /// Returns [`FeedError::InvalidOrigin`] for a bad origin coordinate
    /// (before any upstream call) and [`FeedError::Upstream`] when the
    /// provider fetch fails; no partial page is ever returned. Identity and
    /// interaction-log failures degrade to an unpersonalized page instead
    /// of erroring.
    pub async fn assemble(&self, request: &FeedRequest) -> Result<FeedPage, FeedError> {
        validate_origin(request.origin)?;

        let query = NearbyQuery {
            origin: request.origin,
            radius_m: request
                .radius_m
                .unwrap_or(self.config.default_radius_m)
                .clamp(MIN_RADIUS_M, MAX_RADIUS_M),
            page_token: request.page_token.clone(),
        };

        let (fetched, signals) = tokio::join!(
            self.provider.search_nearby(&query),
            self.signals_for(request),
        );
        let page = fetched.map_err(|source| FeedError::Upstream { source })?;

        let mut seen_ids = HashSet::new();
        let mut scored: Vec<(Restaurant, ScoreDiagnostics)> = page
            .places
            .iter()
            .map(|raw| {
                let restaurant = normalize_place(raw, Some(request.origin));
                let diagnostics = score_place(
                    restaurant.rating,
                    signals.get(&restaurant.id),
                    &self.config.weights,
                );
                (restaurant, diagnostics)
            })
            .filter(|(restaurant, _)| restaurant.name != UNKNOWN_NAME)
            .filter(|(restaurant, _)| seen_ids.insert(restaurant.id.clone()))
            .collect();

        // Stable sort keeps provider order among equal scores.
        scored.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

        let include_diagnostics = request.include_diagnostics;
        let restaurants = scored
            .into_iter()
            .map(|(mut restaurant, diagnostics)| {
                if include_diagnostics {
                    restaurant.score_diagnostics = Some(diagnostics);
                }
                restaurant
            })
            .collect();

        Ok(FeedPage {
            restaurants,
            next_page_token: page
                .next_page_token
                .filter(|token| !token.trim().is_empty()),
        })
    }

    /// Resolve the caller and fold their log into per-place signals.
    ///
    /// Every failure on this path is absorbed: the feed still renders, just
    /// without personalization.
    async fn signals_for(&self, request: &FeedRequest) -> HashMap<String, InteractionSignal> {
        let Some(credential) = request.credential.as_deref() else {
            return HashMap::new();
        };

        let user = match self.identity.resolve(credential).await {
            Ok(Some(user)) => user,
            Ok(None) => return HashMap::new(),
            Err(err) => {
                warn!("identity resolution failed, serving unpersonalized feed: {err}");
                return HashMap::new();
            }
        };

        match self.interactions.events_for_user(&user).await {
            Ok(events) => latest_signals(&events),
            Err(err) => {
                warn!("interaction log read failed for {user}, serving unpersonalized feed: {err}");
                HashMap::new()
            }
        }
    }
}

/// Reject a non-finite or out-of-range origin before any upstream call.
fn validate_origin(origin: Coord<f64>) -> Result<(), FeedError> {
    let (latitude, longitude) = (origin.y, origin.x);
    let valid = latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude);
    if valid {
        Ok(())
    } else {
        Err(FeedError::InvalidOrigin {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tableside_core::test_support::{
        MemoryInteractionStore, StaticIdentityResolver, StaticPlacesProvider,
    };
    use tableside_core::{LocalizedText, PlacePage, RawPlace};

    fn raw_place(id: &str, name: Option<&str>, rating: Option<f64>) -> RawPlace {
        RawPlace {
            id: id.into(),
            display_name: name.map(|text| LocalizedText {
                text: Some(text.into()),
            }),
            formatted_address: None,
            rating,
            user_rating_count: None,
            primary_type: None,
            types: Vec::new(),
            photos: Vec::new(),
            location: None,
            price_level: None,
            current_opening_hours: None,
        }
    }

    fn assembler_for(
        page: PlacePage,
    ) -> FeedAssembler<StaticPlacesProvider, MemoryInteractionStore, StaticIdentityResolver> {
        FeedAssembler::new(
            StaticPlacesProvider::new(page),
            MemoryInteractionStore::default(),
            StaticIdentityResolver::new(None),
        )
    }

    fn origin() -> Coord<f64> {
        Coord { x: -0.1278, y: 51.5074 }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::NAN)]
    #[case(90.5, 0.0)]
    #[case(-90.5, 0.0)]
    #[case(0.0, 180.5)]
    #[case(0.0, -180.5)]
    #[tokio::test]
    async fn bad_origin_is_rejected_before_the_provider_call(
        #[case] latitude: f64,
        #[case] longitude: f64,
    ) {
        let provider = StaticPlacesProvider::new(PlacePage::default());
        let assembler = FeedAssembler::new(
            provider,
            MemoryInteractionStore::default(),
            StaticIdentityResolver::new(None),
        );
        let request = FeedRequest::at(Coord {
            x: longitude,
            y: latitude,
        });

        let err = assembler.assemble(&request).await.expect_err("should reject");

        assert!(matches!(err, FeedError::InvalidOrigin { .. }));
        assert!(assembler.provider.seen_queries().is_empty());
    }

    #[rstest]
    #[case(None, DEFAULT_RADIUS_M)]
    #[case(Some(25.0), MIN_RADIUS_M)]
    #[case(Some(2_000.0), 2_000.0)]
    #[case(Some(1_000_000.0), MAX_RADIUS_M)]
    #[tokio::test]
    async fn radius_reaches_the_provider_clamped(
        #[case] radius_m: Option<f64>,
        #[case] expected: f64,
    ) {
        let assembler = assembler_for(PlacePage::default());
        let request = FeedRequest {
            radius_m,
            ..FeedRequest::at(origin())
        };

        assembler.assemble(&request).await.expect("should succeed");

        let queries = assembler.provider.seen_queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].radius_m, expected);
        assert_eq!(queries[0].origin, origin());
    }

    #[tokio::test]
    async fn page_token_passes_through_to_the_provider() {
        let assembler = assembler_for(PlacePage::default());
        let request = FeedRequest {
            page_token: Some("resume-here".into()),
            ..FeedRequest::at(origin())
        };

        assembler.assemble(&request).await.expect("should succeed");

        let queries = assembler.provider.seen_queries();
        assert_eq!(queries[0].page_token.as_deref(), Some("resume-here"));
    }

    #[tokio::test]
    async fn sorts_by_score_descending_with_stable_ties() {
        let page = PlacePage {
            places: vec![
                raw_place("low", Some("Low"), Some(2.0)),
                raw_place("tie-a", Some("Tie A"), Some(3.5)),
                raw_place("high", Some("High"), Some(5.0)),
                raw_place("tie-b", Some("Tie B"), Some(3.5)),
            ],
            next_page_token: None,
        };
        let assembler = assembler_for(page);

        let result = assembler
            .assemble(&FeedRequest::at(origin()))
            .await
            .expect("should succeed");

        let ids: Vec<&str> = result.restaurants.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "tie-a", "tie-b", "low"]);
    }

    #[tokio::test]
    async fn unnamed_records_never_surface() {
        let page = PlacePage {
            places: vec![
                raw_place("named", Some("Named"), Some(1.0)),
                raw_place("anonymous", None, Some(5.0)),
            ],
            next_page_token: None,
        };
        let assembler = assembler_for(page);

        let result = assembler
            .assemble(&FeedRequest::at(origin()))
            .await
            .expect("should succeed");

        let ids: Vec<&str> = result.restaurants.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["named"]);
    }

    #[tokio::test]
    async fn duplicate_ids_collapse_to_first_occurrence() {
        let page = PlacePage {
            places: vec![
                raw_place("places/dup", Some("First"), Some(3.0)),
                raw_place("dup", Some("Second"), Some(5.0)),
            ],
            next_page_token: None,
        };
        let assembler = assembler_for(page);

        let result = assembler
            .assemble(&FeedRequest::at(origin()))
            .await
            .expect("should succeed");

        assert_eq!(result.restaurants.len(), 1);
        assert_eq!(result.restaurants[0].name, "First");
    }

    #[tokio::test]
    async fn scores_are_stripped_without_diagnostics_mode() {
        let page = PlacePage {
            places: vec![raw_place("p", Some("Place"), Some(4.0))],
            next_page_token: None,
        };
        let assembler = assembler_for(page);

        let result = assembler
            .assemble(&FeedRequest::at(origin()))
            .await
            .expect("should succeed");

        assert!(result.restaurants[0].score_diagnostics.is_none());
    }

    #[tokio::test]
    async fn diagnostics_mode_retains_the_breakdown() {
        let page = PlacePage {
            places: vec![raw_place("p", Some("Place"), Some(4.0))],
            next_page_token: None,
        };
        let assembler = assembler_for(page);
        let request = FeedRequest {
            include_diagnostics: true,
            ..FeedRequest::at(origin())
        };

        let result = assembler.assemble(&request).await.expect("should succeed");

        let diagnostics = result.restaurants[0]
            .score_diagnostics
            .expect("diagnostics should be present");
        assert_eq!(diagnostics.score, 80.0);
        assert_eq!(diagnostics.base, 80.0);
        assert!(diagnostics.action.is_none());
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(String::new()), None)]
    #[case(Some("   ".into()), None)]
    #[case(Some("tok-2".into()), Some("tok-2"))]
    #[tokio::test]
    async fn continuation_token_forwards_only_when_non_blank(
        #[case] provider_token: Option<String>,
        #[case] expected: Option<&str>,
    ) {
        let page = PlacePage {
            places: Vec::new(),
            next_page_token: provider_token,
        };
        let assembler = assembler_for(page);

        let result = assembler
            .assemble(&FeedRequest::at(origin()))
            .await
            .expect("should succeed");

        assert_eq!(result.next_page_token.as_deref(), expected);
    }
}
