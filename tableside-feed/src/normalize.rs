//! Map raw provider records into the canonical restaurant shape.
//!
//! Normalization is lossy and defensive: missing values fall back to
//! documented defaults, malformed photo entries are skipped, and a record
//! without a resolvable name is marked with [`UNKNOWN_NAME`] so the
//! assembler can drop it. Nothing here errors; a bad record degrades, it
//! does not fail the page.

use geo::Coord;
use tableside_core::{
    LatLng, PLACE_RESOURCE_PREFIX, PriceLevel, RawPhoto, RawPlace, Restaurant,
    haversine_distance_m,
};

/// Sentinel name marking a record whose display name could not be resolved.
///
/// Records carrying this name never reach a served page.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Cuisine label used when no type tag yields one.
pub const FALLBACK_CUISINE: &str = "restaurant";

/// Type-tag substrings that identify a restaurant-domain tag.
const CUISINE_KEYWORDS: &[&str] = &["restaurant", "food", "cafe"];

/// Separator between a place resource and its photo id.
const PHOTO_SEGMENT: &str = "/photos/";

/// Convert one raw provider record into a canonical [`Restaurant`].
///
/// `origin` is the search origin; distance is computed only when both the
/// origin and the place's coordinate are known, and left unset otherwise.
/// The returned record carries no score diagnostics; scoring happens
/// separately.
#[must_use]
pub fn normalize_place(raw: &RawPlace, origin: Option<Coord<f64>>) -> Restaurant {
    let place_coord = raw.location.as_ref().and_then(LatLng::coord);
    Restaurant {
        id: canonical_id(&raw.id).to_owned(),
        name: resolve_name(raw),
        cuisine: resolve_cuisine(raw),
        rating: raw.rating.unwrap_or(0.0),
        address: raw.formatted_address.clone().unwrap_or_default(),
        review_count: raw.user_rating_count.unwrap_or(0),
        photo_ids: resolve_photo_ids(&raw.photos),
        distance_m: origin
            .zip(place_coord)
            .map(|(from, to)| haversine_distance_m(from, to)),
        price_level: raw.price_level.filter(|level| *level != PriceLevel::Unspecified),
        open_now: raw.current_opening_hours.as_ref().and_then(|hours| hours.open_now),
        score_diagnostics: None,
    }
}

/// Strip the resource prefix when the remainder is non-empty.
fn canonical_id(id: &str) -> &str {
    id.strip_prefix(PLACE_RESOURCE_PREFIX)
        .filter(|rest| !rest.is_empty())
        .unwrap_or(id)
}

/// Resolve the display name, treating blank text as missing.
fn resolve_name(raw: &RawPlace) -> String {
    raw.display_name
        .as_ref()
        .and_then(|name| name.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| UNKNOWN_NAME.to_owned(), ToOwned::to_owned)
}

/// Derive a cuisine label: primary type, else the first secondary type
/// containing a restaurant-domain keyword, else the generic fallback.
/// Underscores in type tags render as spaces.
fn resolve_cuisine(raw: &RawPlace) -> String {
    raw.primary_type
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .or_else(|| {
            raw.types.iter().map(String::as_str).find(|tag| {
                CUISINE_KEYWORDS.iter().any(|keyword| tag.contains(keyword))
            })
        })
        .map_or_else(|| FALLBACK_CUISINE.to_owned(), |tag| tag.replace('_', " "))
}

/// Extract stable photo ids, silently skipping malformed entries.
fn resolve_photo_ids(photos: &[RawPhoto]) -> Vec<String> {
    photos
        .iter()
        .filter_map(|photo| photo.name.as_deref())
        .filter_map(photo_id_from_resource)
        .map(ToOwned::to_owned)
        .collect()
}

/// Photo id from a `<place-resource>/photos/<photo-id>` resource name.
fn photo_id_from_resource(name: &str) -> Option<&str> {
    let (place, photo) = name.split_once(PHOTO_SEGMENT)?;
    (!place.is_empty() && !photo.is_empty() && !photo.contains('/')).then_some(photo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tableside_core::{LatLng, LocalizedText, OpeningHours};

    fn raw(id: &str) -> RawPlace {
        RawPlace {
            id: id.into(),
            display_name: Some(LocalizedText {
                text: Some("Trattoria Roma".into()),
            }),
            formatted_address: None,
            rating: None,
            user_rating_count: None,
            primary_type: None,
            types: Vec::new(),
            photos: Vec::new(),
            location: None,
            price_level: None,
            current_opening_hours: None,
        }
    }

    #[rstest]
    #[case("places/ChIJabc", "ChIJabc")]
    #[case("bare-id", "bare-id")]
    #[case("places/", "places/")]
    fn canonical_id_strips_known_prefix(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(normalize_place(&raw(id), None).id, expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(LocalizedText { text: None }))]
    #[case(Some(LocalizedText { text: Some(String::new()) }))]
    #[case(Some(LocalizedText { text: Some("   ".into()) }))]
    fn missing_name_resolves_to_sentinel(#[case] display_name: Option<LocalizedText>) {
        let mut place = raw("p");
        place.display_name = display_name;
        assert_eq!(normalize_place(&place, None).name, UNKNOWN_NAME);
    }

    #[rstest]
    fn primary_type_wins_for_cuisine() {
        let mut place = raw("p");
        place.primary_type = Some("italian_restaurant".into());
        place.types = vec!["fast_food_restaurant".into()];
        assert_eq!(normalize_place(&place, None).cuisine, "italian restaurant");
    }

    #[rstest]
    fn secondary_type_with_keyword_is_next() {
        let mut place = raw("p");
        place.types = vec![
            "point_of_interest".into(),
            "sushi_restaurant".into(),
            "establishment".into(),
        ];
        assert_eq!(normalize_place(&place, None).cuisine, "sushi restaurant");
    }

    #[rstest]
    fn cuisine_falls_back_to_generic_label() {
        let mut place = raw("p");
        place.types = vec!["point_of_interest".into()];
        assert_eq!(normalize_place(&place, None).cuisine, FALLBACK_CUISINE);
    }

    #[rstest]
    fn photo_ids_follow_resource_pattern() {
        let mut place = raw("p");
        place.photos = vec![
            RawPhoto {
                name: Some("places/p/photos/good-1".into()),
            },
            RawPhoto {
                name: Some("places/p/photos/".into()),
            },
            RawPhoto {
                name: Some("not-a-resource".into()),
            },
            RawPhoto { name: None },
            RawPhoto {
                name: Some("places/p/photos/bad/extra".into()),
            },
            RawPhoto {
                name: Some("places/p/photos/good-2".into()),
            },
        ];

        let restaurant = normalize_place(&place, None);

        assert_eq!(restaurant.photo_ids, vec!["good-1", "good-2"]);
    }

    #[rstest]
    fn absent_values_take_documented_defaults() {
        let restaurant = normalize_place(&raw("p"), None);

        assert_eq!(restaurant.rating, 0.0);
        assert_eq!(restaurant.review_count, 0);
        assert_eq!(restaurant.address, "");
        assert!(restaurant.price_level.is_none());
        assert!(restaurant.open_now.is_none());
        assert!(restaurant.distance_m.is_none());
    }

    #[rstest]
    fn price_and_open_state_pass_through() {
        let mut place = raw("p");
        place.price_level = Some(PriceLevel::Expensive);
        place.current_opening_hours = Some(OpeningHours {
            open_now: Some(false),
        });

        let restaurant = normalize_place(&place, None);

        assert_eq!(restaurant.price_level, Some(PriceLevel::Expensive));
        assert_eq!(restaurant.open_now, Some(false));
    }

    #[rstest]
    fn unspecified_price_level_is_dropped() {
        let mut place = raw("p");
        place.price_level = Some(PriceLevel::Unspecified);
        assert!(normalize_place(&place, None).price_level.is_none());
    }

    #[rstest]
    fn distance_requires_both_coordinates() {
        let origin = Coord { x: 0.0, y: 0.0 };
        let mut place = raw("p");

        assert!(normalize_place(&place, Some(origin)).distance_m.is_none());

        place.location = Some(LatLng {
            latitude: Some(0.0),
            longitude: Some(1.0),
        });
        assert!(normalize_place(&place, None).distance_m.is_none());

        let with_both = normalize_place(&place, Some(origin));
        let distance = with_both.distance_m.expect("distance should be set");
        assert!((distance - 111_195.0).abs() < 10.0);
    }

    #[rstest]
    fn partial_place_coordinate_counts_as_missing() {
        let mut place = raw("p");
        place.location = Some(LatLng {
            latitude: Some(41.9),
            longitude: None,
        });
        let restaurant = normalize_place(&place, Some(Coord { x: 0.0, y: 0.0 }));
        assert!(restaurant.distance_m.is_none());
    }
}
