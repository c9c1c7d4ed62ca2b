//! Reduce a user's interaction log to one signal per place.

use std::cmp::Reverse;
use std::collections::HashMap;

use tableside_core::{InteractionEvent, InteractionSignal};

/// Fold an event log into the most recent signal per place id.
///
/// The store makes no ordering promise, so the log is explicitly sorted by
/// creation time descending before folding; the sort is stable, so among
/// events with identical timestamps the one stored first wins. Only the
/// first event seen per place id contributes; older events stay in the log
/// for history but are ignored for scoring.
///
/// An empty log (for example, an anonymous caller) yields an empty map.
///
/// # Examples
/// ```
/// use tableside_core::{InteractionAction, InteractionEvent};
/// use tableside_feed::latest_signals;
///
/// let log = vec![
///     InteractionEvent {
///         place_id: "x".into(),
///         action: InteractionAction::Skip,
///         time_spent_ms: 500,
///         created_at_ms: 1,
///     },
///     InteractionEvent {
///         place_id: "x".into(),
///         action: InteractionAction::Like,
///         time_spent_ms: 9_000,
///         created_at_ms: 2,
///     },
/// ];
/// let signals = latest_signals(&log);
/// assert_eq!(signals["x"].action, InteractionAction::Like);
/// assert_eq!(signals["x"].time_spent_ms, 9_000);
/// ```
#[must_use]
pub fn latest_signals(events: &[InteractionEvent]) -> HashMap<String, InteractionSignal> {
    let mut ordered: Vec<&InteractionEvent> = events.iter().collect();
    ordered.sort_by_key(|event| Reverse(event.created_at_ms));

    let mut signals = HashMap::new();
    for event in ordered {
        if !signals.contains_key(&event.place_id) {
            signals.insert(
                event.place_id.clone(),
                InteractionSignal {
                    action: event.action,
                    time_spent_ms: event.time_spent_ms,
                },
            );
        }
    }
    signals
}
