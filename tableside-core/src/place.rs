//! Raw place records as returned by the upstream places provider.
//!
//! These types mirror the provider's camelCase JSON wire shape and are
//! deliberately tolerant: every field the provider may omit is optional and
//! defaults on absence, so a sparse record deserializes rather than failing
//! the whole page. Normalization into the canonical
//! [`Restaurant`](crate::Restaurant) shape happens downstream.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Prefix the provider prepends to place resource names, e.g.
/// `places/ChIJN1t_tDeuEmsR`.
pub const PLACE_RESOURCE_PREFIX: &str = "places/";

/// One raw place record from the provider, unmodified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    /// Opaque place id, possibly carrying the `places/` resource prefix.
    pub id: String,
    /// Localized display name, absent for unresolved records.
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    /// Formatted street address.
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// Aggregate rating in `0.0..=5.0`.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    /// Primary type tag, e.g. `italian_restaurant`.
    #[serde(default)]
    pub primary_type: Option<String>,
    /// Secondary type tags.
    #[serde(default)]
    pub types: Vec<String>,
    /// Photo entries carrying opaque resource names.
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    /// Geographic position, absent when the provider has none.
    #[serde(default)]
    pub location: Option<LatLng>,
    /// Price tier, absent when unknown.
    #[serde(default)]
    pub price_level: Option<PriceLevel>,
    /// Opening-hours snapshot, absent when unknown.
    #[serde(default)]
    pub current_opening_hours: Option<OpeningHours>,
}

/// Localized text wrapper used by the provider for display names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    /// The text itself, absent when the provider sends an empty wrapper.
    #[serde(default)]
    pub text: Option<String>,
}

/// One photo entry on a raw place.
///
/// Stable photo ids are extracted from resource names following the
/// `<place-resource>/photos/<photo-id>` pattern; anything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoto {
    /// Photo resource name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Geographic coordinate as sent by the provider.
///
/// Each axis is individually optional; a partial coordinate counts as no
/// coordinate at all.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LatLng {
    /// Convert into a `Coord` when both axes are present.
    #[must_use]
    pub fn coord(&self) -> Option<Coord<f64>> {
        match (self.longitude, self.latitude) {
            (Some(x), Some(y)) => Some(Coord { x, y }),
            _ => None,
        }
    }
}

/// Provider price tier.
///
/// Unrecognized wire values map to [`PriceLevel::Unspecified`] so a new tier
/// on the provider side cannot fail page deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLevel {
    /// `PRICE_LEVEL_FREE`
    #[serde(rename = "PRICE_LEVEL_FREE")]
    Free,
    /// `PRICE_LEVEL_INEXPENSIVE`
    #[serde(rename = "PRICE_LEVEL_INEXPENSIVE")]
    Inexpensive,
    /// `PRICE_LEVEL_MODERATE`
    #[serde(rename = "PRICE_LEVEL_MODERATE")]
    Moderate,
    /// `PRICE_LEVEL_EXPENSIVE`
    #[serde(rename = "PRICE_LEVEL_EXPENSIVE")]
    Expensive,
    /// `PRICE_LEVEL_VERY_EXPENSIVE`
    #[serde(rename = "PRICE_LEVEL_VERY_EXPENSIVE")]
    VeryExpensive,
    /// Any value this crate does not recognize.
    #[serde(other, rename = "PRICE_LEVEL_UNSPECIFIED")]
    Unspecified,
}

/// Opening-hours snapshot on a raw place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    /// Whether the place reports itself open right now.
    #[serde(default)]
    pub open_now: Option<bool>,
}

/// One page of provider results: raw places plus an opaque continuation
/// token for the next page, when one exists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePage {
    /// Raw places in provider order.
    #[serde(default)]
    pub places: Vec<RawPlace>,
    /// Continuation token; opaque, no internal structure.
    #[serde(default)]
    pub next_page_token: Option<String>,
}
