//! Mutation gateway for the feeding checklist.
//!
//! The only user-driven mutation in scope: flipping one entry's `completed`
//! flag. The target entry keeps every other field, and every other entry is
//! value-identical, copy-on-write.

use haven_core::feeding::FeedingEntry;
use haven_core::types::Identified;

use crate::store::EntityStore;

/// Result of a toggle request, so callers can tell a real transition from a
/// no-op on an unknown id without an error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The target entry was found and its flag negated.
    Toggled,
    /// No entry matched the target id; the sequence is unchanged.
    NotFound,
}

/// Return a new sequence in which the target entry's `completed` flag is
/// negated. An unknown id leaves the sequence value-identical and reports
/// [`ToggleOutcome::NotFound`].
pub fn toggle_completed(
    entries: &[FeedingEntry],
    target_id: &str,
) -> (Vec<FeedingEntry>, ToggleOutcome) {
    let mut outcome = ToggleOutcome::NotFound;

    let next = entries
        .iter()
        .map(|entry| {
            if entry.id() == target_id {
                outcome = ToggleOutcome::Toggled;
                let mut flipped = entry.clone();
                flipped.completed = !flipped.completed;
                flipped
            } else {
                entry.clone()
            }
        })
        .collect();

    if outcome == ToggleOutcome::NotFound {
        tracing::warn!(target_id, "Toggle requested for unknown feeding entry");
    }

    (next, outcome)
}

impl EntityStore<FeedingEntry> {
    /// Toggle one entry's completion flag in place. The swap happens in a
    /// single synchronous call, so callers never observe a partial state.
    pub fn toggle_completed(&mut self, target_id: &str) -> ToggleOutcome {
        let (next, outcome) = toggle_completed(self.all(), target_id);
        if outcome == ToggleOutcome::Toggled {
            tracing::debug!(target_id, "Feeding entry completion toggled");
            self.set_items(next);
        }
        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
