//! User interaction events and the per-place signal derived from them.
//!
//! The interaction log is append-only: this crate never mutates or deletes
//! events, it only reads them. Events are recorded against the canonical
//! (unprefixed) place id, the same id that appears in served
//! [`Restaurant`](crate::Restaurant) records.

use serde::{Deserialize, Serialize};

/// Kind of recorded user action on a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionAction {
    /// The user liked the place.
    Like,
    /// The user skipped past the place.
    Skip,
    /// The user withdrew an earlier like.
    Unlike,
}

/// One recorded user action against one place.
///
/// # Examples
/// ```
/// use tableside_core::{InteractionAction, InteractionEvent};
///
/// let event = InteractionEvent {
///     place_id: "abc123".into(),
///     action: InteractionAction::Like,
///     time_spent_ms: 4_200,
///     created_at_ms: 1_700_000_000_000,
/// };
/// assert_eq!(event.action, InteractionAction::Like);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Canonical place id the action targeted.
    pub place_id: String,
    /// What the user did.
    pub action: InteractionAction,
    /// Milliseconds spent viewing the place before acting.
    pub time_spent_ms: u64,
    /// Event creation time as epoch milliseconds.
    pub created_at_ms: i64,
}

/// The most recent interaction for one (user, place) pair.
///
/// Derived per request from the event log; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionSignal {
    /// Action of the most recent event for the place.
    pub action: InteractionAction,
    /// View time attached to that event.
    pub time_spent_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_snake_case() {
        let json = serde_json::to_string(&InteractionAction::Unlike).expect("serialize action");
        assert_eq!(json, "\"unlike\"");
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = InteractionEvent {
            place_id: "abc123".into(),
            action: InteractionAction::Skip,
            time_spent_ms: 500,
            created_at_ms: 1,
        };
        let json = serde_json::to_string(&event).expect("serialize event");
        let back: InteractionEvent = serde_json::from_str(&json).expect("deserialize event");
        assert_eq!(back, event);
    }
}
