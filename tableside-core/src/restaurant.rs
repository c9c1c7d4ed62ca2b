//! Canonical restaurant records served to clients.

use serde::Serialize;

use crate::{InteractionAction, PriceLevel};

/// The canonical, externally-facing representation of a place.
///
/// Produced by the normalizer from a raw provider record. The ranking score
/// used to order a feed page is not part of this shape; only callers flagged
/// as internal testers receive the [`ScoreDiagnostics`] breakdown, and the
/// field is omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Canonical place id with the resource prefix stripped.
    pub id: String,
    /// Resolved display name; never empty in served records.
    pub name: String,
    /// Derived cuisine label, e.g. `italian restaurant`.
    pub cuisine: String,
    /// Aggregate rating, `0.0` when the provider reported none.
    pub rating: f64,
    /// Street address, empty when the provider reported none.
    pub address: String,
    /// Review count, `0` when the provider reported none.
    pub review_count: u32,
    /// Stable photo ids usable with the photo-retrieval surface.
    pub photo_ids: Vec<String>,
    /// Distance from the search origin in metres, when both coordinates
    /// were known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    /// Price tier passed through from the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<PriceLevel>,
    /// Open-now flag passed through from the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    /// Ranking breakdown, populated only for internal testers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_diagnostics: Option<ScoreDiagnostics>,
}

/// Breakdown of a restaurant's ranking score.
///
/// Retained separately from the scalar so the diagnostic surface can show
/// where a score came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDiagnostics {
    /// Final ranking score.
    pub score: f64,
    /// Rating term (`rating * rating_weight`).
    pub base: f64,
    /// Bonus or penalty contributed by the interaction action.
    pub interaction_delta: f64,
    /// Capped view-time bonus.
    pub view_time_bonus: f64,
    /// Action that produced the interaction terms, absent without a signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<InteractionAction>,
}
