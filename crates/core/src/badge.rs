//! Badge styling vocabulary.
//!
//! The upstream UI inferred badge colors by substring-matching a loosely
//! typed class-name string; here every status maps to an explicit style
//! variant the rendering layer can switch on.

use serde::{Deserialize, Serialize};

use crate::dashboard::TaskPriority;
use crate::health::RecordStatus;
use crate::horse::HorseStatus;

/// The fixed palette of badge styles the rendering layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Default,
    Green,
    Emerald,
    Red,
    Amber,
    Blue,
}

impl From<HorseStatus> for BadgeStyle {
    fn from(status: HorseStatus) -> Self {
        match status {
            HorseStatus::Healthy => Self::Green,
            HorseStatus::Treatment => Self::Red,
            HorseStatus::Observation => Self::Amber,
        }
    }
}

impl From<RecordStatus> for BadgeStyle {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Completed => Self::Green,
            RecordStatus::Scheduled => Self::Blue,
            RecordStatus::Urgent => Self::Red,
        }
    }
}

impl From<TaskPriority> for BadgeStyle {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::High => Self::Red,
            TaskPriority::Medium => Self::Amber,
            TaskPriority::Low => Self::Default,
        }
    }
}
