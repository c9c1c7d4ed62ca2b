//! Combine a place's rating with the caller's interaction signal into a
//! ranking score.

use tableside_core::{InteractionAction, InteractionSignal, ScoreDiagnostics};

/// Named tuning constants for the ranking formula.
///
/// These are product-tuning values, not structural constraints: changing
/// them must never require touching the aggregation or sort logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the provider rating.
    pub rating_weight: f64,
    /// Bonus for a `like` signal.
    pub like_bonus: f64,
    /// Penalty for an `unlike` signal.
    pub unlike_penalty: f64,
    /// Milliseconds of view time per bonus point.
    pub view_time_divisor_ms: f64,
    /// Upper bound on the view-time bonus.
    pub view_time_cap: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating_weight: 20.0,
            like_bonus: 50.0,
            unlike_penalty: 30.0,
            view_time_divisor_ms: 1_000.0,
            view_time_cap: 10.0,
        }
    }
}

/// Score one place from its rating and the caller's signal for it.
///
/// The base term is `rating * rating_weight`. A `like` adds `like_bonus`,
/// an `unlike` subtracts `unlike_penalty`, and every action except `unlike`
/// earns a view-time bonus of `time_spent_ms / view_time_divisor_ms` capped
/// at `view_time_cap` — `unlike` is excluded because that signal already
/// penalizes. Without a signal the score is the base term alone.
///
/// The full [`ScoreDiagnostics`] breakdown is returned; the assembler keeps
/// the scalar for ordering and exposes the breakdown only to internal
/// testers.
///
/// # Examples
/// ```
/// use tableside_core::{InteractionAction, InteractionSignal};
/// use tableside_feed::{ScoreWeights, score_place};
///
/// let weights = ScoreWeights::default();
/// assert_eq!(score_place(4.0, None, &weights).score, 80.0);
///
/// let like = InteractionSignal {
///     action: InteractionAction::Like,
///     time_spent_ms: 12_000,
/// };
/// assert_eq!(score_place(4.0, Some(&like), &weights).score, 140.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ranking combines weighted floating-point terms; view times fit f64"
)]
pub fn score_place(
    rating: f64,
    signal: Option<&InteractionSignal>,
    weights: &ScoreWeights,
) -> ScoreDiagnostics {
    let base = rating * weights.rating_weight;
    let (interaction_delta, view_time_bonus, action) = match signal {
        None => (0.0, 0.0, None),
        Some(signal) => {
            let delta = match signal.action {
                InteractionAction::Like => weights.like_bonus,
                InteractionAction::Unlike => -weights.unlike_penalty,
                InteractionAction::Skip => 0.0,
            };
            let bonus = if signal.action == InteractionAction::Unlike {
                0.0
            } else {
                (signal.time_spent_ms as f64 / weights.view_time_divisor_ms)
                    .min(weights.view_time_cap)
            };
            (delta, bonus, Some(signal.action))
        }
    };

    ScoreDiagnostics {
        score: base + interaction_delta + view_time_bonus,
        base,
        interaction_delta,
        view_time_bonus,
        action,
    }
}
