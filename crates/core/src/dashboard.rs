//! Dashboard summary stats and activity-feed vocabulary.

use serde::{Deserialize, Serialize};

use crate::aggregate::percentage;
use crate::horse::{Horse, HorseStatus};

/// Headline stats derived from the live roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelterStats {
    pub total: usize,
    pub healthy: usize,
    /// Horses in treatment or under observation.
    pub needs_attention: usize,
    pub healthy_pct: u32,
}

impl ShelterStats {
    pub fn from_horses(horses: &[Horse]) -> Self {
        let total = horses.len();
        let healthy = horses
            .iter()
            .filter(|h| h.status == HorseStatus::Healthy)
            .count();

        Self {
            total,
            healthy,
            needs_attention: total - healthy,
            healthy_pct: percentage(healthy, total),
        }
    }
}

/// Category of a recent-activity feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Health,
    Feeding,
    Adoption,
    Alert,
}

/// Priority of an upcoming task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}
