//! Feeding schedule entity, time slots, and completion stats.

use std::fmt;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::aggregate::CompletionStats;
use crate::filter::Categorized;
use crate::types::{EntityId, Identified};

/// The fixed, ordered set of daily feeding slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedingTime {
    #[serde(rename = "6:00 AM")]
    Morning,
    #[serde(rename = "12:00 PM")]
    Midday,
    #[serde(rename = "6:00 PM")]
    Evening,
}

impl FeedingTime {
    /// All slots, in chronological order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Midday, Self::Evening];

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "6:00 AM",
            Self::Midday => "12:00 PM",
            Self::Evening => "6:00 PM",
        }
    }

    /// Map a wall-clock hour (0-23) to the slot staff should be working.
    ///
    /// Boundaries are half-open: hours strictly before 12 belong to the
    /// morning feed, hours strictly before 18 to the midday feed, and the
    /// rest of the day to the evening feed.
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 18 {
            Self::Midday
        } else {
            Self::Evening
        }
    }

    /// Slot for the system clock right now.
    ///
    /// This is the only clock binding in the crate; the aggregates below
    /// take the slot as a parameter so they stay deterministic under test.
    pub fn current() -> Self {
        Self::for_hour(chrono::Local::now().hour())
    }
}

impl fmt::Display for FeedingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One feeding-checklist row for one horse at one slot.
///
/// `completed` is the only field a user may mutate (via the gateway in
/// `haven-store`); everything else is preserved unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingEntry {
    pub id: EntityId,
    pub horse_name: String,
    pub time: FeedingTime,
    pub food: String,
    #[serde(with = "supplements")]
    pub supplements: Option<String>,
    pub water: bool,
    pub completed: bool,
    pub barn: String,
}

impl Identified for FeedingEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The schedule screen filters entries by slot.
impl Categorized for FeedingEntry {
    type Category = FeedingTime;

    fn category(&self) -> FeedingTime {
        self.time
    }
}

/// The upstream data source writes the literal string "None" for entries
/// without supplements; map that sentinel to `Option::None` at the boundary.
pub(crate) mod supplements {
    use serde::{Deserialize, Deserializer, Serializer};

    const SENTINEL: &str = "None";

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(SENTINEL))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == SENTINEL { None } else { Some(raw) })
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Completion stats for one slot.
pub fn slot_stats(entries: &[FeedingEntry], slot: FeedingTime) -> CompletionStats {
    let in_slot: Vec<&FeedingEntry> = entries.iter().filter(|e| e.time == slot).collect();
    CompletionStats::measure(&in_slot, |e| e.completed)
}

/// Completion stats across the whole day.
pub fn overall_stats(entries: &[FeedingEntry]) -> CompletionStats {
    CompletionStats::measure(entries, |e| e.completed)
}

/// Entries grouped by slot, in chronological slot order. Slots with no
/// entries still appear, with an empty group.
pub fn group_by_time(entries: &[FeedingEntry]) -> Vec<(FeedingTime, Vec<&FeedingEntry>)> {
    FeedingTime::ALL
        .iter()
        .map(|&slot| (slot, entries.iter().filter(|e| e.time == slot).collect()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
